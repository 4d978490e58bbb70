use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fidlgen_ir::LibraryDescriptor;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to the library's JSON IR
    #[arg(short, long)]
    pub json: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let descriptor = LibraryDescriptor::open(&self.json).unwrap_or_exit();

        let report = ops::info(&descriptor, &self.json);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
