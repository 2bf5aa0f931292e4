use crate::domain::diagnostics::{Diagnostic, DiagnosticKind};
use serde::Serialize;

/// Explicit caller-identity arguments found at a request-constructor call
/// site, as classified by the source inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExplicitArgs {
    /// No identity arguments: the intended common usage.
    None,
    /// Some but not all of the identity triple (the count that was supplied).
    Partial(usize),
    /// The full (file path, method name, line) triple. `line` is 0 when the
    /// third argument was not an integer literal.
    Full {
        file_path: String,
        method_name: String,
        line: u32,
    },
}

/// A discovered invocation of the request constructor, with the ground-truth
/// caller identity computed independently from the surrounding source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Relative path of the file containing the invocation.
    pub file_path: String,
    /// 1-based line of the invocation.
    pub line: u32,
    /// Name of the enclosing method ("" when none could be determined).
    pub enclosing_method: String,
    pub explicit_args: ExplicitArgs,
}

/// Call-Site Validator - checks explicit identity arguments against ground truth.
///
/// Stateless across invocations; shares nothing with the resolution engine.
pub struct CallSiteValidator;

impl Default for CallSiteValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CallSiteValidator {
    pub fn new() -> Self {
        Self
    }

    /// Apply the two-tier policy to one invocation:
    ///
    /// - zero explicit arguments → compliant;
    /// - the full triple, exactly matching ground truth, with the supplied
    ///   line at or after the true line → compliant (a later line is an
    ///   intentional reference to a different, later declaration);
    /// - any divergence, or a supplied line before the true line → flagged,
    ///   naming each diverging field and its expected value;
    /// - a partial argument list → always flagged, independent of whether the
    ///   partial values happen to be correct.
    pub fn validate(&self, invocation: &Invocation) -> Option<Diagnostic> {
        match &invocation.explicit_args {
            ExplicitArgs::None => None,
            ExplicitArgs::Partial(count) => Some(
                Diagnostic::new(
                    DiagnosticKind::SuspiciousExplicitArguments,
                    invocation.file_path.clone(),
                    invocation.line,
                    format!(
                        "request constructor should be called with no explicit identity \
                         arguments ({} of 3 supplied)",
                        count
                    ),
                )
                .with_remediation("strip the explicit identity arguments"),
            ),
            ExplicitArgs::Full {
                file_path,
                method_name,
                line,
            } => {
                let mut diverging = Vec::new();
                if file_path != &invocation.file_path {
                    diverging.push(format!(
                        "file path (expected \"{}\")",
                        invocation.file_path
                    ));
                }
                if method_name != &invocation.enclosing_method {
                    diverging.push(format!(
                        "method name (expected \"{}\")",
                        invocation.enclosing_method
                    ));
                }
                // A line at or after the true position deliberately points at
                // a different, later declaration and is allowed.
                if *line < invocation.line {
                    diverging.push(format!("line number (expected >= {})", invocation.line));
                }

                if diverging.is_empty() {
                    return None;
                }
                Some(
                    Diagnostic::new(
                        DiagnosticKind::SuspiciousExplicitArguments,
                        invocation.file_path.clone(),
                        invocation.line,
                        format!("suspicious explicit arguments: {}", diverging.join(", ")),
                    )
                    .with_remediation(format!(
                        "replace the explicit arguments with (\"{}\", \"{}\", {})",
                        invocation.file_path, invocation.enclosing_method, invocation.line
                    )),
                )
            }
        }
    }

    /// Validate a batch of invocations, in a stable (file, line) order.
    pub fn validate_all(&self, invocations: &[Invocation]) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = invocations
            .iter()
            .filter_map(|invocation| self.validate(invocation))
            .collect();
        diagnostics.sort_by(|a, b| (&a.file_path, a.line).cmp(&(&b.file_path, b.line)));
        diagnostics
    }
}
