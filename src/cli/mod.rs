//! CLI module

pub mod serve;

use clap::{Parser, Subcommand};

/// Retrieval-augmented inference API for neurological syndromes
#[derive(Parser)]
#[command(name = "neurorag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the inference API server
    Serve,
}
