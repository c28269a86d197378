use clap::Parser;
use konquest::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match Cli::parse().command_or_default() {
        Command::Serve(args) => cli::serve::run(args).await,
    }
}
