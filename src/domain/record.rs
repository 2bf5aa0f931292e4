use serde::Serialize;

/// Identifies a declaration site: "this method, in this file".
///
/// Keys are compared by exact string equality: no path normalization and no
/// case folding. The scanner is responsible for producing consistent relative
/// paths so that build-time keys and run-time keys line up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SiteKey {
    /// Path of the declaring file, relative to the scanned root.
    pub file_path: String,
    /// Name of the annotated method.
    pub method_name: String,
}

impl SiteKey {
    pub fn new(file_path: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            method_name: method_name.into(),
        }
    }
}

/// One declared template occurrence attached to a method.
///
/// `tag` is the disambiguation identifier; the empty string means "no explicit
/// tag". Entries are immutable once harvested and live as long as the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// The raw template text, with positional placeholders like `{0}`.
    pub template: String,
    /// 1-based line of the declaration in its source file.
    pub line: u32,
    /// Disambiguation tag ("" when the declaration carries none).
    pub tag: String,
}

impl TemplateEntry {
    /// Entry without an explicit disambiguation tag.
    pub fn new(template: impl Into<String>, line: u32) -> Self {
        Self {
            template: template.into(),
            line,
            tag: String::new(),
        }
    }

    /// Entry carrying an explicit disambiguation tag.
    pub fn tagged(template: impl Into<String>, line: u32, tag: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            line,
            tag: tag.into(),
        }
    }
}
