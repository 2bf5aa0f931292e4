// Declaration extraction: `#[message_template(..)]` attributes and the `fn`
// items they annotate, by line-oriented scanning of source text.

use crate::domain::record::{SiteKey, TemplateEntry};
use regex::Regex;
use std::sync::OnceLock;

/// Matches a template attribute line and captures the template literal plus
/// the optional `tag = "..."` literal.
fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^\s*#\[message_template\(\s*"((?:[^"\\]|\\.)*)"\s*(?:,\s*tag\s*=\s*"((?:[^"\\]|\\.)*)"\s*)?\)\]"#,
        )
        .expect("message_template attribute regex")
    })
}

/// Matches a `fn` item header and captures its name. Qualifiers in their
/// grammatical order (`pub`, `default`, `const`, `async`, `unsafe`, `extern`).
pub(crate) fn fn_item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:default\s+)?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?(?:extern\s+"[^"]*"\s+)?fn\s+([A-Za-z_][A-Za-z0-9_]*)"#,
        )
        .expect("fn item regex")
    })
}

/// Resolve the common escapes of a Rust string literal body. Unknown escape
/// sequences keep the escaped character.
pub(crate) fn unescape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Extract every template declaration in `source`, keyed by `file_path` and
/// the name of the `fn` item the attribute annotates.
///
/// The declaration line is the 1-based line of the attribute itself. Between
/// the attribute and its `fn` item only other attributes, comments, and blank
/// lines may appear; an attribute that annotates anything else is skipped.
pub fn extract_declarations(file_path: &str, source: &str) -> Vec<(SiteKey, TemplateEntry)> {
    let lines: Vec<&str> = source.lines().collect();
    let mut declarations = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(captures) = attribute_regex().captures(line) else {
            continue;
        };
        let Some(method_name) = annotated_fn_name(&lines, idx) else {
            continue;
        };

        let template = unescape_literal(&captures[1]);
        let declaration_line = (idx + 1) as u32;
        let entry = match captures.get(2) {
            Some(tag) => TemplateEntry::tagged(template, declaration_line, unescape_literal(tag.as_str())),
            None => TemplateEntry::new(template, declaration_line),
        };
        declarations.push((SiteKey::new(file_path, method_name), entry));
    }

    declarations
}

/// Scan forward from the attribute at `attr_idx` to the `fn` item it
/// annotates, tolerating interleaved attributes, comments, and blank lines.
fn annotated_fn_name(lines: &[&str], attr_idx: usize) -> Option<String> {
    for line in &lines[attr_idx + 1..] {
        if let Some(captures) = fn_item_regex().captures(line) {
            return Some(captures[1].to_string());
        }
        let trimmed = line.trim_start();
        let skippable =
            trimmed.is_empty() || trimmed.starts_with("#[") || trimmed.starts_with("//");
        if !skippable {
            return None;
        }
    }
    None
}
