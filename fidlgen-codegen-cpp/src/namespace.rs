//! Namespace open/close statements.
//!
//! Closes are count-matched against the segments they are given. They never
//! look at what was actually opened, so a preamble and postamble rendered from
//! different segment lists produce an unbalanced file.

use fidlgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// `namespace <segment> {` for each segment, outermost first.
#[derive(Debug, Clone, Copy)]
pub struct OpenNamespaces<'a, S>(pub &'a [S]);

impl<S: AsRef<str>> Renderable for OpenNamespaces<'_, S> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .iter()
            .map(|segment| CodeFragment::line(format!("namespace {} {{", segment.as_ref())))
            .collect()
    }
}

/// One `}` per segment, innermost first.
///
/// Unlabeled by default. [`CloseNamespaces::labeled`] appends
/// `  // namespace <segment>` to each brace.
#[derive(Debug, Clone, Copy)]
pub struct CloseNamespaces<'a, S> {
    segments: &'a [S],
    labeled: bool,
}

impl<'a, S> CloseNamespaces<'a, S> {
    pub fn new(segments: &'a [S]) -> Self {
        Self {
            segments,
            labeled: false,
        }
    }

    /// Annotate each closing brace with the namespace it closes.
    pub fn labeled(mut self) -> Self {
        self.labeled = true;
        self
    }
}

impl<S: AsRef<str>> Renderable for CloseNamespaces<'_, S> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.segments
            .iter()
            .rev()
            .map(|segment| {
                if self.labeled {
                    CodeFragment::line(format!("}}  // namespace {}", segment.as_ref()))
                } else {
                    CodeFragment::line("}")
                }
            })
            .collect()
    }
}

/// Render the open statements for `segments`. Empty input yields empty text.
pub fn open_namespaces<S: AsRef<str>>(segments: &[S]) -> String {
    CodeBuilder::new().node(&OpenNamespaces(segments)).build()
}

/// Render one unlabeled close per segment. Empty input yields empty text.
pub fn close_namespaces<S: AsRef<str>>(segments: &[S]) -> String {
    CodeBuilder::new()
        .node(&CloseNamespaces::new(segments))
        .build()
}
