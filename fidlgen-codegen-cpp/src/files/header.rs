use std::path::{Path, PathBuf};

use fidlgen_codegen::{CodeBuilder, GeneratedFile};
use fidlgen_ir::{RenderContext, header_path};

use crate::{header_postamble, header_preamble, traits_postamble, traits_preamble};

/// The `<library>/cpp/fidl.h` header of one library.
///
/// Declarations go between the header preamble and postamble, inside the
/// library's namespaces. Trait specializations go inside the `fidl` namespace
/// after them. Both are opaque text, emitted verbatim in insertion order.
#[derive(Debug, Clone)]
pub struct HeaderFile<'a> {
    context: &'a RenderContext,
    declarations: Vec<String>,
    traits: Vec<String>,
}

impl<'a> HeaderFile<'a> {
    pub fn new(context: &'a RenderContext) -> Self {
        Self {
            context,
            declarations: Vec::new(),
            traits: Vec::new(),
        }
    }

    /// Add a declaration block.
    pub fn declaration(mut self, code: impl Into<String>) -> Self {
        self.declarations.push(code.into());
        self
    }

    /// Add declaration blocks.
    pub fn declarations(mut self, code: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.declarations.extend(code.into_iter().map(Into::into));
        self
    }

    /// Add a traits block.
    pub fn trait_block(mut self, code: impl Into<String>) -> Self {
        self.traits.push(code.into());
        self
    }

    /// Add traits blocks.
    pub fn trait_blocks(mut self, code: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.traits.extend(code.into_iter().map(Into::into));
        self
    }

    /// Path of the header relative to the output root.
    pub fn relative_path(&self) -> String {
        header_path(&self.context.library)
    }
}

impl GeneratedFile for HeaderFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        let ctx = self.context;

        let mut builder = CodeBuilder::new();
        builder.push_raw(&header_preamble(ctx));
        for code in &self.declarations {
            builder.push_blank();
            push_block(&mut builder, code);
        }

        if !ctx.library.is_empty() {
            builder.push_blank().push_raw(&header_postamble(ctx));
        }

        builder.push_blank().push_raw(&traits_preamble(ctx));
        for (i, code) in self.traits.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            push_block(&mut builder, code);
        }
        builder.push_raw(&traits_postamble(ctx));

        builder.build()
    }
}

/// Emit a caller-supplied block, terminating it with a newline if needed.
fn push_block(builder: &mut CodeBuilder, code: &str) {
    builder.push_raw(code);
    if !code.ends_with('\n') {
        builder.push_blank();
    }
}
