//! Generated files and writing them to disk.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk.
    ///
    /// Leaves the file untouched when it already holds the rendered content,
    /// so regenerating an unchanged library does not bump its mtime.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_if_changed(&path, &self.render())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content
    Unchanged,
}

fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        tracing::debug!(path = %path.display(), "unchanged");
        return Ok(WriteResult::Unchanged);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "written");
    Ok(WriteResult::Written)
}
