use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use fidlgen_codegen_cpp::Fragment;
use fidlgen_ir::LibraryDescriptor;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct FragmentCommand {
    /// Fragment to print
    #[arg(value_enum)]
    pub kind: FragmentKind,

    /// Path to the library's JSON IR
    #[arg(short, long)]
    pub json: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FragmentKind {
    HeaderPreamble,
    HeaderPostamble,
    TraitsPreamble,
    TraitsPostamble,
}

impl From<FragmentKind> for Fragment {
    fn from(kind: FragmentKind) -> Self {
        match kind {
            FragmentKind::HeaderPreamble => Fragment::HeaderPreamble,
            FragmentKind::HeaderPostamble => Fragment::HeaderPostamble,
            FragmentKind::TraitsPreamble => Fragment::TraitsPreamble,
            FragmentKind::TraitsPostamble => Fragment::TraitsPostamble,
        }
    }
}

impl FragmentCommand {
    pub fn run(&self) -> Result<()> {
        let descriptor = LibraryDescriptor::open(&self.json).unwrap_or_exit();
        let fragment = Fragment::from(self.kind);
        tracing::debug!(fragment = fragment.name(), library = %descriptor.name, "rendering");

        print!("{}", fragment.render(&descriptor.render_context()));
        Ok(())
    }
}
