// Invocation extraction: discovers request-constructor call sites and
// computes the ground-truth caller identity each one should carry.

use crate::adapters::scan::declaration::fn_item_regex;
use crate::domain::validator::{ExplicitArgs, Invocation};
use regex::Regex;
use std::sync::OnceLock;

/// Matches `template_request!(..)` and `TemplateRequest::new(..)` call sites
/// and captures the raw argument list (single-line invocations only; the
/// macro forms the tool emits and validates fit on one line).
fn invocation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:template_request!|TemplateRequest::new)\(([^)]*)\)")
            .expect("request invocation regex")
    })
}

/// Extract every request-constructor invocation in `source`.
///
/// Ground truth per invocation: `file_path` as passed in (relative to the
/// scanned root), the 1-based line of the call, and the name of the nearest
/// enclosing `fn` item ("" when none is found).
pub fn extract_invocations(file_path: &str, source: &str) -> Vec<Invocation> {
    let lines: Vec<&str> = source.lines().collect();
    let mut invocations = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        for captures in invocation_regex().captures_iter(line) {
            invocations.push(Invocation {
                file_path: file_path.to_string(),
                line: (idx + 1) as u32,
                enclosing_method: enclosing_fn_name(&lines, idx).unwrap_or_default(),
                explicit_args: classify_arguments(&captures[1]),
            });
        }
    }

    invocations
}

/// Classify the raw argument list of one invocation.
///
/// Zero arguments is the compliant automatic form; exactly three become the
/// explicit identity triple (line falls back to 0 when it is not an integer
/// literal, which the validator then flags as "before the true line"); any
/// other count is partial.
pub fn classify_arguments(raw: &str) -> ExplicitArgs {
    let args = split_top_level(raw);
    match args.len() {
        0 => ExplicitArgs::None,
        3 => ExplicitArgs::Full {
            file_path: unquote(&args[0]),
            method_name: unquote(&args[1]),
            line: args[2].trim().parse().unwrap_or(0),
        },
        count => ExplicitArgs::Partial(count),
    }
}

/// Split an argument list on top-level commas, respecting string literals.
fn split_top_level(raw: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for ch in raw.chars() {
        match ch {
            _ if escaped => {
                escaped = false;
                current.push(ch);
            }
            '\\' if in_string => {
                escaped = true;
                current.push(ch);
            }
            '"' => {
                in_string = !in_string;
                current.push(ch);
            }
            ',' if !in_string => {
                args.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        args.push(current.trim().to_string());
    }
    args.retain(|arg| !arg.is_empty());
    args
}

/// Strip surrounding quotes from a string-literal argument and resolve its
/// escapes; non-literal arguments come back trimmed but otherwise as written.
fn unquote(arg: &str) -> String {
    let trimmed = arg.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        super::declaration::unescape_literal(&trimmed[1..trimmed.len() - 1])
    } else {
        trimmed.to_string()
    }
}

/// Nearest enclosing `fn` item for the line at `idx`: the line itself when it
/// declares one, otherwise the closest preceding `fn` header with strictly
/// smaller indentation (so a nested fn attributes to the innermost item).
fn enclosing_fn_name(lines: &[&str], idx: usize) -> Option<String> {
    if let Some(captures) = fn_item_regex().captures(lines[idx]) {
        return Some(captures[1].to_string());
    }

    let call_indent = indentation(lines[idx]);
    for line in lines[..idx].iter().rev() {
        if let Some(captures) = fn_item_regex().captures(line) {
            if indentation(line) < call_indent {
                return Some(captures[1].to_string());
            }
        }
    }
    None
}

fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
