//! C++ header fragment emission for fidlgen.
//!
//! The renderers here are pure functions of a [`RenderContext`]: the same
//! context always yields the same bytes, nothing is validated, and nothing is
//! logged or written. Identifiers and include paths are trusted as given; a
//! bad segment surfaces as a C++ compile error in the generated header, not
//! as an error here.
//!
//! [`Generator`] and [`files::HeaderFile`] sit on top and are the only parts
//! that touch the filesystem.

mod fragments;
mod generator;
mod namespace;

pub mod files;

pub use fidlgen_codegen::{Backend, GenerateResult, PreviewFile};
pub use fidlgen_ir::RenderContext;
pub use fragments::{
    Fragment, GENERATED_WARNING, INCLUDE_GUARD, LICENSE_HEADER, RUNTIME_HEADER,
    TRAITS_NAMESPACE, header_postamble, header_preamble, traits_postamble, traits_preamble,
};
pub use generator::Generator;
pub use namespace::{CloseNamespaces, OpenNamespaces, close_namespaces, open_namespaces};
