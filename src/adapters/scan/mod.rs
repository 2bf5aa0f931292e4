//! Source inspector: walks a source tree and extracts template declarations
//! and request-constructor invocations from each file.
//!
//! Extraction is line-oriented text scanning. A file that fails to read is
//! reported and skipped; it never aborts the pass.

pub mod declaration;
pub mod invocation;

use crate::domain::ports::SourceReader;
use crate::domain::record::{SiteKey, TemplateEntry};
use crate::domain::validator::Invocation;
use anyhow::Result;
use std::path::{Component, Path};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Everything one inspection pass produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Declaration stream for the table builder, in (file, line) order.
    pub declarations: Vec<(SiteKey, TemplateEntry)>,
    /// Request call sites for the call-site validator.
    pub invocations: Vec<Invocation>,
    /// Number of files successfully scanned.
    pub files_scanned: usize,
    /// Relative paths of files that could not be read.
    pub skipped: Vec<String>,
}

/// Walks a root directory and runs declaration + invocation extraction on
/// every Rust source file.
pub struct SourceScanner;

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceScanner {
    pub fn new() -> Self {
        Self
    }

    /// Scan `root` recursively. Files are visited in sorted path order so the
    /// resulting declaration stream is deterministic.
    pub fn scan(&self, root: &Path, reader: &dyn SourceReader) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        let mut paths: Vec<_> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !is_ignored_dir(entry))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
            .map(|entry| entry.into_path())
            .collect();
        paths.sort();

        for path in paths {
            let relative = relative_path(root, &path);
            match reader.read(&path) {
                Ok(source) => {
                    let declarations = declaration::extract_declarations(&relative, &source);
                    let invocations = invocation::extract_invocations(&relative, &source);
                    debug!(
                        file = %relative,
                        declarations = declarations.len(),
                        invocations = invocations.len(),
                        "scanned"
                    );
                    outcome.declarations.extend(declarations);
                    outcome.invocations.extend(invocations);
                    outcome.files_scanned += 1;
                }
                Err(err) => {
                    warn!(file = %relative, error = %err, "skipping unreadable file");
                    outcome.skipped.push(relative);
                }
            }
        }

        Ok(outcome)
    }
}

/// Directories that never hold harvestable sources: build output and hidden
/// trees. The walk root itself is always entered.
fn is_ignored_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name == "target" || name.starts_with('.'))
}

/// Path relative to the scanned root, with `/` separators regardless of
/// platform, so keys compare exactly across build time and run time.
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = Path::new("/repo");
        let path = Path::new("/repo/src/app.rs");
        assert_eq!(relative_path(root, path), "src/app.rs");
    }

    #[test]
    fn test_relative_path_outside_root_kept_whole() {
        let root = Path::new("/repo");
        let path = Path::new("/elsewhere/app.rs");
        assert_eq!(relative_path(root, path), "elsewhere/app.rs");
    }
}
