//! Battle engine command-line driver.
//!
//! Usage:
//!   cargo run -p battle_cli -- simulate --teams data/teams.json --seed 7
//!   cargo run -p battle_cli -- simulate --teams data/teams.json --seed 7 --json
//!   cargo run -p battle_cli -- replay --script data/script.json
//!
//! Logs go to stderr and follow `RUST_LOG` (default `info`); the transcript
//! goes to stdout.

mod cmd;
mod models;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{replay, simulate};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "battle", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a battle with both sides choosing random legal actions
    Simulate(simulate::SimulateArgs),

    /// Replay a scripted battle
    Replay(replay::ReplayArgs),
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate(args) => simulate::execute(args),
        Commands::Replay(args) => replay::execute(args),
    }
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
