//! Core operations.
//!
//! This module contains the business logic for fidlgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod info;

pub use generate::generate;
pub use info::info;
