use crate::domain::diagnostics::Diagnostic;
use crate::domain::record::TemplateEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub root: String,
    pub files_scanned: usize,
    pub method_count: usize,
    pub template_count: usize,
    pub invocation_count: usize,
    pub diagnostic_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub file_path: String,
    pub method_name: String,
    pub line: u32,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub matched: bool,
    pub template: Option<String>,
    pub declaration_line: Option<u32>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsResponse {
    pub items: Vec<DiagnosticDto>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticDto {
    pub id: String,
    pub severity: String,
    pub file_path: String,
    pub line: u32,
    pub message: String,
    pub remediation: Option<String>,
}

impl From<&Diagnostic> for DiagnosticDto {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            id: diagnostic.kind.id().to_string(),
            severity: format!("{:?}", diagnostic.severity).to_lowercase(),
            file_path: diagnostic.file_path.clone(),
            line: diagnostic.line,
            message: diagnostic.message.clone(),
            remediation: diagnostic.remediation.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplatesResponse {
    pub items: Vec<TemplateGroupDto>,
    pub method_count: usize,
    pub template_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateGroupDto {
    pub file_path: String,
    pub method_name: String,
    pub entries: Vec<TemplateEntryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateEntryDto {
    pub template: String,
    pub line: u32,
    pub tag: String,
}

impl From<&TemplateEntry> for TemplateEntryDto {
    fn from(entry: &TemplateEntry) -> Self {
        Self {
            template: entry.template.clone(),
            line: entry.line,
            tag: entry.tag.clone(),
        }
    }
}
