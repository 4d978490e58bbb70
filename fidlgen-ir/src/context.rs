//! The render context handed to the fragment renderers.

use serde::{Deserialize, Serialize};

/// Everything needed to render the fragments framing one library's header.
///
/// Values are taken as-is. Segments are not checked to be C++ identifiers and
/// header paths are not checked to exist; whatever the resolver produced ends
/// up in the generated text unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Namespace segments, outermost first. Empty means the global namespace.
    #[serde(default)]
    pub library: Vec<String>,
    /// Include paths, in the order they are emitted.
    #[serde(default)]
    pub headers: Vec<String>,
}

impl RenderContext {
    /// Create a context from namespace segments and include paths.
    pub fn new(
        library: impl IntoIterator<Item = impl Into<String>>,
        headers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            library: library.into_iter().map(Into::into).collect(),
            headers: headers.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a namespace segment.
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.library.push(segment.into());
        self
    }

    /// Append an include path.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.headers.push(header.into());
        self
    }

    /// Whether the library lives in the global namespace.
    pub fn is_global(&self) -> bool {
        self.library.is_empty()
    }

    /// The dotted library name, e.g. `fuchsia.io`.
    pub fn library_name(&self) -> String {
        self.library.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_order() {
        let ctx = RenderContext::new(["fuchsia", "io"], ["b.h", "a.h"]);
        assert_eq!(ctx.library, vec!["fuchsia", "io"]);
        assert_eq!(ctx.headers, vec!["b.h", "a.h"]);
    }

    #[test]
    fn test_builder_methods() {
        let ctx = RenderContext::default()
            .with_segment("fuchsia")
            .with_segment("mem")
            .with_header("a.h")
            .with_header("a.h");
        assert_eq!(ctx.library_name(), "fuchsia.mem");
        // No dedup: the caller owns that.
        assert_eq!(ctx.headers, vec!["a.h", "a.h"]);
    }

    #[test]
    fn test_is_global() {
        assert!(RenderContext::default().is_global());
        assert!(!RenderContext::default().with_segment("fuchsia").is_global());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let ctx: RenderContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx, RenderContext::default());
    }
}
