//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod import;

/// Football events to property graph exporter
#[derive(Parser)]
#[command(name = "footgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export match metadata and events as bulk-import node and relationship files
    Import(import::ImportArgs),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Import(args) => import::execute(args),
        }
    }
}
