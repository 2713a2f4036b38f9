//! neurochat terminal client entry point.
//!
//! Binary name: `nchat`
//!
//! Parses CLI arguments, initializes tracing, then runs the interactive
//! chat session (or emits shell completions).

mod backend;
mod chat;
mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,neurochat_core=debug,neurochat_cli=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "nchat", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Chat) | None => chat::loop_runner::run_chat(cli.endpoint).await,
    }
}
