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
pub struct GenerateCommand {
    /// Path to the library's JSON IR
    #[arg(short, long)]
    pub json: PathBuf,

    /// Output root; the header lands at <root>/<library path>/cpp/fidl.h
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let descriptor = LibraryDescriptor::open(&self.json).unwrap_or_exit();

        let report = ops::generate(&descriptor, &self.output, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
