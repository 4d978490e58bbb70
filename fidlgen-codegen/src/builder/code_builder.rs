//! Code builder utility for generating line-oriented source text.

use super::{CodeFragment, Renderable};

/// Fluent API for building source text line by line.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental emission.
///
/// # Example (Consuming API)
///
/// ```
/// use fidlgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("#pragma once")
///     .blank()
///     .each(["a.h", "b.h"], |b, h| b.line(&format!("#include <{}>", h)))
///     .build();
///
/// assert_eq!(code, "#pragma once\n\n#include <a.h>\n#include <b.h>\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use fidlgen_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("namespace fidl {")
///     .push_line("}  // namespace fidl");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty CodeBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without a trailing newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a `//` line comment (mutable).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str("//");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add raw text without a trailing newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    /// Add a `//` line comment.
    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    /// Emit a Renderable node.
    pub fn node(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("#pragma once").build();
        assert_eq!(code, "#pragma once\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::new()
            .line("#pragma once")
            .blank()
            .line("#include <a.h>")
            .build();

        assert_eq!(code, "#pragma once\n\n#include <a.h>\n");
    }

    #[test]
    fn test_raw() {
        let code = CodeBuilder::new().raw("int x;").raw(" int y;").build();
        assert_eq!(code, "int x; int y;");
    }

    #[test]
    fn test_comment() {
        let code = CodeBuilder::new()
            .comment("Copyright")
            .comment("")
            .comment("WARNING")
            .build();

        assert_eq!(code, "// Copyright\n//\n// WARNING\n");
    }

    #[test]
    fn test_conditional() {
        let with_guard = CodeBuilder::new()
            .when(true, |b| b.line("#pragma once"))
            .line("struct Foo;")
            .build();

        let without_guard = CodeBuilder::new()
            .when(false, |b| b.line("#pragma once"))
            .line("struct Foo;")
            .build();

        assert_eq!(with_guard, "#pragma once\nstruct Foo;\n");
        assert_eq!(without_guard, "struct Foo;\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::new()
            .each(["fuchsia", "io"], |b, ns| {
                b.line(&format!("namespace {} {{", ns))
            })
            .build();

        assert_eq!(code, "namespace fuchsia {\nnamespace io {\n");
    }

    #[test]
    fn test_is_empty() {
        assert!(CodeBuilder::new().is_empty());
        assert!(!CodeBuilder::new().blank().is_empty());
    }

    #[test]
    fn test_mutable_api_basic() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("namespace fidl {")
            .push_blank()
            .push_line("}  // namespace fidl");
        assert_eq!(
            builder.as_str(),
            "namespace fidl {\n\n}  // namespace fidl\n"
        );
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("comment"),
                    CodeFragment::line("int x = 1;"),
                ]
            }
        }

        let mut builder = CodeBuilder::new();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "// comment\nint x = 1;\n");
    }

    #[test]
    fn test_emit_sequence_fragment() {
        struct SequenceNode;
        impl Renderable for SequenceNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::sequence(vec![
                    CodeFragment::line("}"),
                    CodeFragment::line("}"),
                ])]
            }
        }

        let code = CodeBuilder::new().node(&SequenceNode).build();
        assert_eq!(code, "}\n}\n");
    }
}
