//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from library info.
#[derive(Debug)]
pub struct InfoReport {
    /// Dotted library name.
    pub name: String,
    /// Descriptor file path.
    pub json_path: PathBuf,
    /// Namespace segments, outermost first.
    pub namespaces: Vec<String>,
    /// Include paths, in emission order.
    pub headers: Vec<String>,
    /// Header path relative to the output root.
    pub output_path: String,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        let name = if self.name.is_empty() {
            "(global)"
        } else {
            self.name.as_str()
        };
        out.key_value("Library", name);
        out.key_value("Descriptor", &self.json_path.display().to_string());
        out.key_value("Output", &self.output_path);
        out.newline();

        out.section("Namespaces");
        if self.namespaces.is_empty() {
            out.list_item("(none)");
        }
        for segment in &self.namespaces {
            out.list_item(segment);
        }
        out.newline();

        out.section("Includes");
        if self.headers.is_empty() {
            out.list_item("(none)");
        }
        for header in &self.headers {
            out.list_item(header);
        }
    }
}
