//! Development tasks for the board workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Hash, Options, Preview, Unhash};

/// Development tasks for the board workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for board rendering", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Render a board file as text
    Preview(Preview),

    /// Show or change persisted display options
    Options(Options),

    /// Hash a coordinate into its trait-store key
    Hash(Hash),

    /// Recover the coordinate behind a trait-store key
    Unhash(Unhash),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for BOARD_* display overrides)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Preview(cmd) => cmd.execute(),
        Command::Options(cmd) => cmd.execute(),
        Command::Hash(cmd) => cmd.execute(),
        Command::Unhash(cmd) => cmd.execute(),
    }
}
