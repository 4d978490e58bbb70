//! Library descriptors and render contexts for the fidlgen C++ backend.
//!
//! The resolver emits one JSON descriptor per FIDL library. This crate reads
//! the part of it the header emitter needs and lowers it into a
//! [`RenderContext`], the only input the fragment renderers take.
//!
//! # Architecture
//!
//! ```text
//! library.json → LibraryDescriptor (parsing) → RenderContext (lowering) → codegen
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod descriptor;
mod error;

pub use context::RenderContext;
pub use descriptor::{Dependency, LibraryDescriptor, header_path};
pub use error::{Error, Result};
