//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use message_template_cache::domain::ports::{MessageFormatter, SourceReader};

/// Mock SourceReader that serves content from an in-memory map.
pub struct MockSourceReader {
    files: HashMap<PathBuf, String>,
}

impl MockSourceReader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
        self
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
    }
}

impl Default for MockSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for MockSourceReader {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }
}

/// Mock formatter that tags its output, to prove delegation happened.
pub struct MockFormatter;

impl MessageFormatter for MockFormatter {
    fn format(&self, template: &str, args: &[&dyn Display]) -> String {
        format!("[mock:{}:{}]", template, args.len())
    }
}
