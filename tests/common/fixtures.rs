//! Test fixture generators for integration tests.
#![allow(dead_code)]

use anyhow::Result;
use message_template_cache::domain::record::{SiteKey, TemplateEntry};
use std::fs;
use std::path::Path;

pub fn key(file_path: &str, method_name: &str) -> SiteKey {
    SiteKey::new(file_path, method_name)
}

/// Declaration stream for a method with one untagged and one tagged template.
pub fn tagged_pair(file_path: &str, method_name: &str) -> Vec<(SiteKey, TemplateEntry)> {
    vec![
        (
            key(file_path, method_name),
            TemplateEntry::new("plain {0}", 5),
        ),
        (
            key(file_path, method_name),
            TemplateEntry::tagged("tagged {0}", 5, "v2"),
        ),
    ]
}

/// Write a small annotated source tree under `root`:
///
/// - `src/app.rs`: two clean methods (one template, and an untagged+tagged
///   pair), each with a zero-argument request call site;
/// - `src/dupes.rs`: a method with two untagged templates (duplicate tag);
/// - `src/badcall.rs`: one stale explicit call site (line before the true
///   line) and one compliant distant reference;
/// - `target/skipme.rs`: declaration that must never be harvested.
pub fn write_fixture_tree(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("src"))?;
    fs::create_dir_all(root.join("target"))?;

    fs::write(
        root.join("src/app.rs"),
        concat!(
            "#[message_template(\"Hello, {0}!\")]\n",
            "fn greet(name: &str) -> String {\n",
            "    let request = template_request!();\n",
            "    GLOBAL.message(&request, &[&name])\n",
            "}\n",
            "\n",
            "#[message_template(\"Goodbye, {0}.\")]\n",
            "#[message_template(\"Farewell, {0}.\", tag = \"formal\")]\n",
            "fn farewell(name: &str) -> String {\n",
            "    let request = template_request!().with_tag(\"formal\");\n",
            "    GLOBAL.message(&request, &[&name])\n",
            "}\n",
        ),
    )?;

    fs::write(
        root.join("src/dupes.rs"),
        concat!(
            "#[message_template(\"first\")]\n",
            "#[message_template(\"second\")]\n",
            "fn ambiguous() {}\n",
        ),
    )?;

    fs::write(
        root.join("src/badcall.rs"),
        concat!(
            "fn stale() {\n",
            "    let r = TemplateRequest::new(\"src/badcall.rs\", \"stale\", 1);\n",
            "}\n",
            "\n",
            "fn distant() {\n",
            "    let r = TemplateRequest::new(\"src/badcall.rs\", \"distant\", 99);\n",
            "}\n",
        ),
    )?;

    fs::write(
        root.join("target/skipme.rs"),
        "#[message_template(\"never harvested\")]\nfn hidden() {}\n",
    )?;

    Ok(())
}

/// Totals for `write_fixture_tree`: (files, methods, templates, diagnostics).
pub const FIXTURE_FILES: usize = 3;
pub const FIXTURE_METHODS: usize = 3;
pub const FIXTURE_TEMPLATES: usize = 5;
pub const FIXTURE_DIAGNOSTICS: usize = 2;
