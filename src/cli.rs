use crate::app::dto::ResolveRequest;
use crate::app::engine::TemplateEngine;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Scan the tree and print a harvest summary; `--json` dumps the full table.
pub fn run_harvest(engine: &TemplateEngine, json: bool) -> Result<()> {
    if json {
        let listing = engine.templates();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let health = engine.health();
    println!("Harvest Summary:");
    println!("  Files scanned: {}", health.files_scanned);
    println!("  Methods:       {}", health.method_count);
    println!("  Templates:     {}", health.template_count);
    println!("  Call sites:    {}", health.invocation_count);
    println!("  Diagnostics:   {}", health.diagnostic_count);

    let listing = engine.templates();
    for group in &listing.items {
        println!("\n{}::{}", group.file_path, group.method_name);
        for entry in &group.entries {
            let tag = if entry.tag.is_empty() {
                String::new()
            } else {
                format!(" [{}]", entry.tag)
            };
            println!("  line {:>4}{} | {}", entry.line, tag, entry.template);
        }
    }
    Ok(())
}

/// Print every build-time diagnostic in rustc-like form.
pub fn run_check(engine: &TemplateEngine) -> Result<()> {
    let diagnostics = engine.diagnostics();
    if diagnostics.items.is_empty() {
        println!("No diagnostics.");
        return Ok(());
    }

    for item in &diagnostics.items {
        println!("{}[{}]: {}", item.severity, item.id, item.message);
        println!("  --> {}:{}", item.file_path, item.line);
        if let Some(help) = &item.remediation {
            println!("   = help: {}", help);
        }
        println!();
    }
    println!(
        "{} warning(s) emitted. Diagnostics are advisory; the table was still built.",
        diagnostics.total
    );
    Ok(())
}

/// Emit the generated static-initialization source to `out` (or stdout).
pub fn run_generate(engine: &TemplateEngine, out: Option<&Path>) -> Result<()> {
    let source = engine.generate();
    match out {
        Some(path) => {
            std::fs::write(path, &source)
                .with_context(|| format!("Failed to write generated source: {}", path.display()))?;
            println!("Generated table written to {}", path.display());
        }
        None => print!("{}", source),
    }
    Ok(())
}

/// Resolve a single request against the freshly harvested table (debug aid).
pub fn run_resolve(
    engine: &TemplateEngine,
    file_path: &str,
    method_name: &str,
    line: u32,
    tag: Option<&str>,
) -> Result<()> {
    let response = engine.resolve(ResolveRequest {
        file_path: file_path.to_string(),
        method_name: method_name.to_string(),
        line,
        tag: tag.unwrap_or_default().to_string(),
    });

    if response.matched {
        println!("Resolved:");
        if let Some(line) = response.declaration_line {
            println!("  Declared at line: {}", line);
        }
        if let Some(tag) = response.tag.filter(|t| !t.is_empty()) {
            println!("  Tag:              {}", tag);
        }
        if let Some(template) = response.template {
            println!("  Template:         {}", template);
        }
    } else {
        println!("No match.");
    }
    Ok(())
}
