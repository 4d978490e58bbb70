mod completions;
mod fragment;
mod generate;
mod info;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fragment::FragmentCommand;
use generate::GenerateCommand;
use info::InfoCommand;

/// Extension trait for exiting on descriptor errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fidlgen_ir::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "fidlgen")]
#[command(version)]
#[command(about = "Generate C++ headers for FIDL libraries")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Fragment(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C++ header for a library
    Generate(GenerateCommand),

    /// Show what would be rendered for a library
    Info(InfoCommand),

    /// Print a single header fragment
    Fragment(FragmentCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
