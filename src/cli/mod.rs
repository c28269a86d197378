//! Command-line interface for the Konquest server

pub mod serve;

use clap::{Parser, Subcommand};

/// Konquest - find secret keywords, score points, climb the leaderboard
#[derive(Parser)]
#[command(name = "konquest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(serve::ServeArgs),
}

impl Cli {
    /// The chosen subcommand, falling back to `serve` with no overrides
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or(Command::Serve(serve::ServeArgs::default()))
    }
}
