use crate::domain::record::SiteKey;
use crate::domain::table::HarvestTable;

/// Code emitter: renders the harvest table as a generated Rust source file.
///
/// The output is static initialization code, one function that registers
/// every harvested entry with a [`TemplateCache`](crate::runtime::TemplateCache),
/// executed once by the host before first resolution. There is no persisted
/// data format; the table is rebuilt from source on every harvest pass.
pub struct RustTableEmitter;

impl Default for RustTableEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RustTableEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Emit the generated source. Keys are ordered by (file, method) so the
    /// output is byte-stable across runs; entries keep declaration order.
    pub fn emit(&self, table: &HarvestTable) -> String {
        let mut groups: Vec<(&SiteKey, _)> = table.iter().collect();
        groups.sort_by_key(|(key, _)| (key.file_path.clone(), key.method_name.clone()));

        let mut out = String::new();
        out.push_str(&format!(
            "// @generated by mtctool v{}. Do not edit.\n\n",
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str("use message_template_cache::domain::record::{SiteKey, TemplateEntry};\n");
        out.push_str("use message_template_cache::domain::table::HarvestTable;\n");
        out.push_str("use message_template_cache::runtime::TemplateCache;\n\n");
        out.push_str("/// Install the harvested template table. Returns `false` when the\n");
        out.push_str("/// cache was already initialized.\n");
        out.push_str("pub fn initialize_template_cache(cache: &TemplateCache) -> bool {\n");
        out.push_str("    let mut table = HarvestTable::new();\n");

        for (key, entries) in groups {
            for entry in entries {
                out.push_str("    table.insert(\n");
                out.push_str(&format!(
                    "        SiteKey::new(\"{}\", \"{}\"),\n",
                    escape(&key.file_path),
                    escape(&key.method_name)
                ));
                if entry.tag.is_empty() {
                    out.push_str(&format!(
                        "        TemplateEntry::new(\"{}\", {}),\n",
                        escape(&entry.template),
                        entry.line
                    ));
                } else {
                    out.push_str(&format!(
                        "        TemplateEntry::tagged(\"{}\", {}, \"{}\"),\n",
                        escape(&entry.template),
                        entry.line,
                        escape(&entry.tag)
                    ));
                }
                out.push_str("    );\n");
            }
        }

        out.push_str("    cache.initialize(table)\n");
        out.push_str("}\n");
        out
    }
}

/// Escape a string for inclusion in a Rust string literal.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}
