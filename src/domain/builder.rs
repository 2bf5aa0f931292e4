use crate::domain::diagnostics::{Diagnostic, DiagnosticKind};
use crate::domain::record::{SiteKey, TemplateEntry};
use crate::domain::table::HarvestTable;
use std::collections::HashSet;

/// Output of one harvest pass: the assembled table plus any uniqueness
/// diagnostics. Check failures are advisory: the offending entries remain in
/// the table so that well-formed keys stay resolvable.
#[derive(Debug)]
pub struct HarvestOutcome {
    pub table: HarvestTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Harvest table builder - Domain Service assembling declarations into the table.
pub struct TableBuilder;

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Group declarations by site key, preserving first-seen order within each
    /// group, and run the tag uniqueness check on every group that ends up
    /// with more than one entry.
    ///
    /// No side effects beyond the returned outcome; the builder reads and
    /// writes no global state.
    pub fn build(
        &self,
        declarations: impl IntoIterator<Item = (SiteKey, TemplateEntry)>,
    ) -> HarvestOutcome {
        let mut table = HarvestTable::new();
        for (key, entry) in declarations {
            table.insert(key, entry);
        }

        let mut diagnostics = Vec::new();
        for (key, entries) in table.iter() {
            if entries.len() > 1 {
                diagnostics.extend(check_tag_uniqueness(key, entries));
            }
        }
        // Table iteration order is unspecified; pin a stable report order.
        diagnostics.sort_by(|a, b| (&a.file_path, a.line).cmp(&(&b.file_path, b.line)));

        HarvestOutcome { table, diagnostics }
    }
}

/// Uniqueness check over one key's group: a running set of seen tags (the
/// empty string counts as a tag value), one diagnostic per duplicate
/// occurrence at that entry's declaration line. Every duplicate is reported;
/// "last tag wins" is not assumed, because two indistinguishable templates
/// hide a real resolution bug.
pub fn check_tag_uniqueness(key: &SiteKey, entries: &[TemplateEntry]) -> Vec<Diagnostic> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut diagnostics = Vec::new();

    for entry in entries {
        if !seen.insert(entry.tag.as_str()) {
            let shown_tag = if entry.tag.is_empty() {
                "(no tag)".to_string()
            } else {
                format!("\"{}\"", entry.tag)
            };
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticKind::DuplicateTag,
                    key.file_path.clone(),
                    entry.line,
                    format!(
                        "duplicate disambiguation tag {} for method `{}`",
                        shown_tag, key.method_name
                    ),
                )
                .with_remediation(format!(
                    "give each template on `{}` a distinct tag",
                    key.method_name
                )),
            );
        }
    }

    diagnostics
}
