//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod info;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use info::InfoReport;
pub use output::{Report, TerminalOutput};
