use crate::adapters::emit::rust::RustTableEmitter;
use crate::adapters::fs::reader::FileSourceReader;
use crate::adapters::scan::SourceScanner;
use crate::app::dto::*;
use crate::domain::builder::TableBuilder;
use crate::domain::diagnostics::Diagnostic;
use crate::domain::resolver::{Resolver, TemplateRequest};
use crate::domain::table::HarvestTable;
use crate::domain::validator::{CallSiteValidator, Invocation};
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Orchestrates one harvest pass (scan → build → validate) and serves
/// queries over the built state. Cloneable; the state lives behind an
/// `Arc<RwLock>` so the HTTP server and CLI share one instance, and `reload`
/// swaps in a freshly built pass wholesale.
#[derive(Clone)]
pub struct TemplateEngine {
    inner: Arc<RwLock<EngineData>>,
}

struct EngineData {
    root: PathBuf,
    table: Arc<HarvestTable>,
    diagnostics: Vec<Diagnostic>,
    invocation_count: usize,
    files_scanned: usize,
}

impl TemplateEngine {
    /// Run a full harvest pass over `root`.
    pub fn load_from_root(root: &Path) -> Result<Self> {
        let data = harvest(root)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(data)),
        })
    }

    /// Construct an engine from pre-built parts.
    ///
    /// Used for testing or when declarations come from an external inspection
    /// source instead of a directory walk.
    pub fn from_parts(
        root: PathBuf,
        table: HarvestTable,
        diagnostics: Vec<Diagnostic>,
        invocations: &[Invocation],
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(EngineData {
                root,
                table: Arc::new(table),
                diagnostics,
                invocation_count: invocations.len(),
                files_scanned: 0,
            })),
        }
    }

    /// Rebuild the whole pass from the same root and swap it in.
    pub fn reload(&self) -> Result<HealthResponse> {
        let root = {
            let data = self.inner.read().unwrap();
            data.root.clone()
        };
        let new_data = harvest(&root)?;

        let mut data = self.inner.write().unwrap();
        *data = new_data;
        Ok(health_of(&data))
    }

    pub fn health(&self) -> HealthResponse {
        let data = self.inner.read().unwrap();
        health_of(&data)
    }

    /// Resolve one request against the built table. Misses are an ordinary
    /// response, never an error.
    pub fn resolve(&self, request: ResolveRequest) -> ResolveResponse {
        let data = self.inner.read().unwrap();
        let domain_request =
            TemplateRequest::new(request.file_path, request.method_name, request.line)
                .with_tag(request.tag);
        match Resolver::new().resolve(&data.table, &domain_request) {
            Some(entry) => ResolveResponse {
                matched: true,
                template: Some(entry.template.clone()),
                declaration_line: Some(entry.line),
                tag: Some(entry.tag.clone()),
            },
            None => ResolveResponse {
                matched: false,
                template: None,
                declaration_line: None,
                tag: None,
            },
        }
    }

    pub fn diagnostics(&self) -> DiagnosticsResponse {
        let data = self.inner.read().unwrap();
        let items: Vec<DiagnosticDto> = data.diagnostics.iter().map(DiagnosticDto::from).collect();
        let total = items.len();
        DiagnosticsResponse { items, total }
    }

    /// All harvested template groups, in stable (file, method) order.
    pub fn templates(&self) -> TemplatesResponse {
        let data = self.inner.read().unwrap();
        let mut items: Vec<TemplateGroupDto> = data
            .table
            .iter()
            .map(|(key, entries)| TemplateGroupDto {
                file_path: key.file_path.clone(),
                method_name: key.method_name.clone(),
                entries: entries.iter().map(TemplateEntryDto::from).collect(),
            })
            .collect();
        items.sort_by(|a, b| {
            (&a.file_path, &a.method_name).cmp(&(&b.file_path, &b.method_name))
        });
        TemplatesResponse {
            method_count: data.table.method_count(),
            template_count: data.table.template_count(),
            items,
        }
    }

    /// Render the generated static-initialization source for the built table.
    pub fn generate(&self) -> String {
        let data = self.inner.read().unwrap();
        RustTableEmitter::new().emit(&data.table)
    }
}

/// One full harvest pass: scan the tree, assemble the table, validate call
/// sites, and merge the diagnostics into a single (file, line) ordered list.
fn harvest(root: &Path) -> Result<EngineData> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to open scan root: {}", root.display()))?;

    let reader = FileSourceReader::new();
    let outcome = SourceScanner::new().scan(&root, &reader)?;
    info!(
        files = outcome.files_scanned,
        declarations = outcome.declarations.len(),
        invocations = outcome.invocations.len(),
        "scan complete"
    );

    let built = TableBuilder::new().build(outcome.declarations);
    let mut diagnostics = built.diagnostics;
    diagnostics.extend(CallSiteValidator::new().validate_all(&outcome.invocations));
    diagnostics.sort_by(|a, b| (&a.file_path, a.line).cmp(&(&b.file_path, b.line)));

    info!(
        methods = built.table.method_count(),
        templates = built.table.template_count(),
        diagnostics = diagnostics.len(),
        "harvest pass complete"
    );

    Ok(EngineData {
        root,
        table: Arc::new(built.table),
        diagnostics,
        invocation_count: outcome.invocations.len(),
        files_scanned: outcome.files_scanned,
    })
}

fn health_of(data: &EngineData) -> HealthResponse {
    HealthResponse {
        root: data.root.to_string_lossy().to_string(),
        files_scanned: data.files_scanned,
        method_count: data.table.method_count(),
        template_count: data.table.template_count(),
        invocation_count: data.invocation_count,
        diagnostic_count: data.diagnostics.len(),
    }
}
