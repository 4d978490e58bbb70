use std::path::Path;

use eyre::{Result, WrapErr};
use fidlgen_codegen::{Backend, GenerateResult, GeneratedFile, PreviewFile, WriteResult};
use fidlgen_ir::{LibraryDescriptor, RenderContext};

use crate::files::HeaderFile;

/// C++ backend producing one library's `cpp/fidl.h` header.
#[derive(Debug, Clone)]
pub struct Generator {
    context: RenderContext,
    declarations: Vec<String>,
    traits: Vec<String>,
}

impl Backend for Generator {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let header = self.header();
        vec![PreviewFile {
            path: header.relative_path(),
            content: header.render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let header = self.header();
        let relative = header.relative_path();
        tracing::debug!(
            library = %self.context.library_name(),
            path = %relative,
            "generating header"
        );

        let outcome = header
            .write(output_dir)
            .wrap_err_with(|| format!("failed to generate {}", relative))?;

        let mut result = GenerateResult::default();
        match outcome {
            WriteResult::Written => result.written.push(relative),
            WriteResult::Unchanged => result.unchanged.push(relative),
        }
        Ok(result)
    }
}

impl Generator {
    pub fn new(context: RenderContext) -> Self {
        Self {
            context,
            declarations: Vec::new(),
            traits: Vec::new(),
        }
    }

    /// Build a generator for a parsed library descriptor.
    pub fn from_descriptor(descriptor: &LibraryDescriptor) -> Self {
        Self::new(descriptor.render_context())
    }

    /// Declaration blocks to place inside the library's namespaces.
    pub fn with_declarations(mut self, code: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.declarations.extend(code.into_iter().map(Into::into));
        self
    }

    /// Trait specializations to place inside the `fidl` namespace.
    pub fn with_traits(mut self, code: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.traits.extend(code.into_iter().map(Into::into));
        self
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    fn header(&self) -> HeaderFile<'_> {
        HeaderFile::new(&self.context)
            .declarations(self.declarations.iter().cloned())
            .trait_blocks(self.traits.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_metadata() {
        let generator = Generator::new(RenderContext::default());
        assert_eq!(generator.language(), "cpp");
        assert_eq!(generator.file_extension(), "h");
    }

    #[test]
    fn test_preview_single_header() {
        let generator = Generator::new(RenderContext::new(["fuchsia", "io"], ["a.h"]));
        let files = generator.preview();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "fuchsia/io/cpp/fidl.h");
        assert!(files[0].content.contains("#include <a.h>"));
    }

    #[test]
    fn test_from_descriptor() {
        let descriptor = LibraryDescriptor::from_json_str(
            r#"{ "name": "fuchsia.io", "library_dependencies": [{ "name": "fuchsia.mem" }] }"#,
        )
        .unwrap();
        let generator = Generator::from_descriptor(&descriptor);
        assert_eq!(
            generator.context(),
            &RenderContext::new(["fuchsia", "io"], ["fuchsia/mem/cpp/fidl.h"])
        );
    }
}
