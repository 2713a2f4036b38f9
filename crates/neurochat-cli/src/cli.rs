//! CLI argument definitions for the `nchat` binary.
//!
//! Uses clap derive macros. Running `nchat` with no subcommand starts the
//! chat session.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Default chat backend endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/chat";

/// Chat with the neural core from your terminal.
#[derive(Parser)]
#[command(name = "nchat", version, about, long_about = None)]
pub struct Cli {
    /// Chat backend endpoint.
    #[arg(long, env = "NEUROCHAT_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default).
    Chat,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
