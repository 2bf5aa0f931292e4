use crate::domain::record::{SiteKey, TemplateEntry};
use crate::domain::table::HarvestTable;
use serde::Serialize;

/// A run-time request to resolve the template that applies to one call site.
///
/// Constructed once per call site and immutable afterwards; `with_tag` narrows
/// a request to a specific disambiguation tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRequest {
    pub key: SiteKey,
    /// 1-based line of the call site.
    pub line: u32,
    /// Requested disambiguation tag ("" when not narrowed).
    pub tag: String,
}

impl TemplateRequest {
    pub fn new(file_path: impl Into<String>, method_name: impl Into<String>, line: u32) -> Self {
        Self {
            key: SiteKey::new(file_path, method_name),
            line,
            tag: String::new(),
        }
    }

    /// Narrow the request with an explicit disambiguation tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

/// Resolution Engine - maps a request to the single template entry it means.
pub struct Resolver;

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self
    }

    /// Disambiguation algorithm:
    ///
    /// 1. Absent key → no match (an ordinary outcome, not an error).
    /// 2. A single declared template is always the answer, regardless of the
    ///    requested tag or line: the common case stays comparison-free.
    /// 3. Otherwise filter by exact tag equality; an empty filter is a miss
    ///    (never fall back to an unrelated tag). Among the survivors, the
    ///    entry nearest the request line wins; ties go to the earliest
    ///    declaration. Line proximity is a heuristic tie-break, not an exact
    ///    correctness guarantee: call sites rarely share the declaration's
    ///    line, so "nearest" approximates "textually belongs to the caller".
    ///
    /// A pure read: repeated calls with the same request and unchanged table
    /// yield identical results, and the table is never copied or mutated.
    pub fn resolve<'a>(
        &self,
        table: &'a HarvestTable,
        request: &TemplateRequest,
    ) -> Option<&'a TemplateEntry> {
        let entries = table.get(&request.key)?;
        if entries.len() == 1 {
            return entries.first();
        }

        // The uniqueness invariant makes the filter yield at most one entry,
        // but ambiguous groups stay in the table as built, so pick nearest.
        entries
            .iter()
            .filter(|entry| entry.tag == request.tag)
            .min_by_key(|entry| entry.line.abs_diff(request.line))
    }
}
