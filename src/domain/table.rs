use crate::domain::record::{SiteKey, TemplateEntry};
use std::collections::HashMap;

/// The harvest table: declaration site → ordered template entries.
///
/// Insertion order within a key's group is source declaration order, never
/// sorted. The table is rebuilt whole on every harvest pass; after the build
/// it is read-only. Duplicate tags within a group are a build-time defect
/// reported by the builder: the offending entries stay in the table so that
/// well-formed keys remain usable.
#[derive(Debug, Default)]
pub struct HarvestTable {
    entries: HashMap<SiteKey, Vec<TemplateEntry>>,
}

impl HarvestTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to its key's group, preserving arrival order.
    pub fn insert(&mut self, key: SiteKey, entry: TemplateEntry) {
        self.entries.entry(key).or_default().push(entry);
    }

    /// Entries declared for a key, in declaration order.
    pub fn get(&self, key: &SiteKey) -> Option<&[TemplateEntry]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &SiteKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached methods (distinct keys).
    pub fn method_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of cached templates across all methods.
    pub fn template_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all groups. Key order is unspecified; callers that need a
    /// stable order (the emitter, JSON dumps) sort on their side.
    pub fn iter(&self) -> impl Iterator<Item = (&SiteKey, &[TemplateEntry])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
