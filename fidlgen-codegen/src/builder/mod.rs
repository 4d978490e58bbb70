//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building line-oriented source text
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
