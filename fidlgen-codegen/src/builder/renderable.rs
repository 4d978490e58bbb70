//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Nodes describe their text as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into the final string.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text without newline.
    Raw(String),
    /// A `//` line comment. Empty text renders a bare `//`.
    Comment(String),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a raw text fragment.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Create a line comment fragment.
    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
