use anyhow::Result;
use std::fmt::Display;
use std::path::Path;

/// Source code reader port (implemented by Infrastructure)
pub trait SourceReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<String>;
}

/// Message formatting port: fills a template's positional placeholders.
///
/// The core's contract stops at "produced a template string or did not";
/// placeholder syntax and locale concerns belong to the implementor.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, template: &str, args: &[&dyn Display]) -> String;
}
