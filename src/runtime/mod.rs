//! Run-time side of the cache: the process-wide table and the message API.
//!
//! The table is initialized exactly once, before first resolution, by the
//! generated `initialize_template_cache` function; every later access is a
//! pure read. A resolution requested before initialization is a miss, never a
//! blocking wait.

use crate::adapters::format::basic::BasicFormatter;
use crate::domain::ports::MessageFormatter;
use crate::domain::record::TemplateEntry;
use crate::domain::resolver::{Resolver, TemplateRequest};
use crate::domain::table::HarvestTable;
use std::fmt::Display;
use std::sync::OnceLock;

/// Process-wide template cache with an initialize-once lifecycle.
pub struct TemplateCache {
    table: OnceLock<HarvestTable>,
    resolver: Resolver,
}

/// A ready-made process-wide instance; hosts that prefer their own lifetime
/// management can construct and pass a `TemplateCache` of their own.
pub static GLOBAL: TemplateCache = TemplateCache::new();

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCache {
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
            resolver: Resolver,
        }
    }

    /// Install the harvested table. The first call wins; later calls are
    /// ignored and return `false`. There is no cache invalidation: exactly
    /// one build pass per process lifetime.
    pub fn initialize(&self, table: HarvestTable) -> bool {
        self.table.set(table).is_ok()
    }

    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }

    /// Number of cached methods (0 before initialization).
    pub fn method_count(&self) -> usize {
        self.table.get().map_or(0, HarvestTable::method_count)
    }

    /// Number of cached message templates (0 before initialization).
    pub fn template_count(&self) -> usize {
        self.table.get().map_or(0, HarvestTable::template_count)
    }

    /// Resolve a request to its template entry. Absent key, unmatched tag,
    /// and an uninitialized cache are all ordinary misses.
    pub fn resolve(&self, request: &TemplateRequest) -> Option<&TemplateEntry> {
        let table = self.table.get()?;
        self.resolver.resolve(table, request)
    }

    /// The raw template string for a request, if any.
    pub fn template(&self, request: &TemplateRequest) -> Option<&str> {
        self.resolve(request).map(|entry| entry.template.as_str())
    }

    /// Format the resolved template with positional arguments. A miss yields
    /// the empty string, not a failure.
    pub fn message(&self, request: &TemplateRequest, args: &[&dyn Display]) -> String {
        self.message_with(&BasicFormatter, request, args)
    }

    /// Like [`message`](Self::message), with an explicit formatter (e.g. a
    /// locale-aware one).
    pub fn message_with(
        &self,
        formatter: &dyn MessageFormatter,
        request: &TemplateRequest,
        args: &[&dyn Display],
    ) -> String {
        match self.template(request) {
            Some(template) => formatter.format(template, args),
            None => String::new(),
        }
    }
}
