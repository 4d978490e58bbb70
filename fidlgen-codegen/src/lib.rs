//! Shared code generation utilities for fidlgen backends.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific backends (e.g., `fidlgen-codegen-cpp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Text building blocks (CodeBuilder, CodeFragment, Renderable)
//! - [`backend`] - The [`Backend`] trait and its result types
//! - [`file`] - Generated files and how they are written to disk
//! - [`testing`] - Test utilities (feature-gated)

pub mod backend;
pub mod builder;
pub mod file;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use backend::{Backend, GenerateResult, PreviewFile};
pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use file::{GeneratedFile, WriteResult};
