//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{generate::GenerateArgs, order::OrderArgs};

#[derive(Parser)]
#[command(name = "worklister")]
#[command(author, version, about = "Generate CNC worklist job files from cabinet folders")]
#[command(
    long_about = "Converts a folder of part-program files (one cabinet) or a folder of cabinet subfolders (one order) into Joblst worklist documents in machining order."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate worklist documents for a cabinet or order folder
    Generate(GenerateArgs),

    /// Preview the default machining order of a cabinet folder
    Order(OrderArgs),
}
