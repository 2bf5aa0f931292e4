//! Build-time diagnostics: stable identifiers, warning severity, and a plain
//! rustc-style rendering used by the CLI.

use serde::Serialize;

/// Severity level for diagnostics. Harvest defects are advisory, so both
/// built-in kinds report as `Warning`; `Error` is reserved for future rules
/// that must fail a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// The two diagnostic kinds, each with a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Explicit caller-identity arguments diverge from ground truth, or a
    /// partial argument list was supplied.
    SuspiciousExplicitArguments,
    /// Two templates on the same method share a disambiguation tag.
    DuplicateTag,
}

impl DiagnosticKind {
    pub fn id(self) -> &'static str {
        match self {
            DiagnosticKind::SuspiciousExplicitArguments => "MTC0001",
            DiagnosticKind::DuplicateTag => "MTC0002",
        }
    }
}

/// A single build-time diagnostic, anchored to a source position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Relative path of the offending file.
    pub file_path: String,
    /// 1-based line of the offending declaration or invocation.
    pub line: u32,
    /// Human-readable message carrying the offending field(s) and expected values.
    pub message: String,
    /// Suggested fix, offered but never auto-applied.
    pub remediation: Option<String>,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        file_path: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            file_path: file_path.into(),
            line,
            message: message.into(),
            remediation: None,
        }
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    /// Render without colors, one diagnostic per block:
    ///
    /// ```text
    /// warning[MTC0002]: duplicate disambiguation tag "x" for method `greet`
    ///   --> src/app.rs:14
    ///    = help: give each template on `greet` a distinct tag
    /// ```
    pub fn render_plain(&self) -> String {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        let mut out = format!("{}[{}]: {}\n", severity, self.kind.id(), self.message);
        out.push_str(&format!("  --> {}:{}\n", self.file_path, self.line));
        if let Some(help) = &self.remediation {
            out.push_str(&format!("   = help: {}\n", help));
        }
        out
    }
}
