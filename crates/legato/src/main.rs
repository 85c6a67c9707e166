use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;
mod config;
mod sim;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Track(args) => args.run(),
        Command::Run(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(name = "legato", about = "Bounded-acceleration motion control tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a single axis from command-line parameters.
    Track(cli::track::TrackArgs),
    /// Simulate every axis in a scenario file.
    Run(cli::run::RunArgs),
}
