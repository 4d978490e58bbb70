//! Generate command report data structures.

use std::path::PathBuf;

use fidlgen_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from header generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Dotted library name.
    pub library: String,
    /// Number of namespaces the header opens.
    pub namespaces: usize,
    /// Number of include directives for dependencies.
    pub headers: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of header generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files that were (re)written.
    pub written: Vec<String>,
    /// Files that were already up to date.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview(preview) => {
                for file in &preview.files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.key_value("Library", &self.library);
                out.key_value("Files", &format!("{} would be generated", preview.files.len()));
            }
            GenerationResult::Written(written) => {
                out.key_value("Library", &self.library);
                out.key_value("Namespaces", &self.namespaces.to_string());
                out.key_value("Includes", &self.headers.to_string());
                out.newline();

                out.section(&format!("Generated in {}", written.output_dir.display()));
                for path in &written.written {
                    out.added_item(path);
                }
                for path in &written.unchanged {
                    out.kept_item(&format!("{} (unchanged)", path));
                }
            }
        }
    }
}
