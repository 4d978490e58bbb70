//! Language-agnostic backend trait.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific backends.
///
/// A backend owns the render context of one library and knows which files it
/// produces for it.
pub trait Backend {
    /// Language identifier (e.g., "cpp")
    fn language(&self) -> &'static str;

    /// File extension for generated headers (e.g., "h")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files that were (re)written, relative to the output directory
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Total number of files the backend produced.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
