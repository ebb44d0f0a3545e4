//! CLI frontend for the Storyweft branching-narrative engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "storyweft",
    about = "Storyweft — a branching-narrative game driven by JSON story graphs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story interactively, starting at the "start" node
    Play {
        /// Path to the JSON story file
        file: PathBuf,

        /// Player name used when the interactive prompt is left empty
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Requested starting health. The engine pins starting health
        /// to 100, so this is accepted and ignored unless
        /// --honor-health is also given
        #[arg(long, default_value = "100")]
        health: i64,

        /// Keep every granted item instead of only the most recent one
        #[arg(long)]
        accumulate_items: bool,

        /// Actually honor --health instead of pinning health to 100
        #[arg(long)]
        honor_health: bool,
    },

    /// Report how often each choice label appears in a story file
    Stats {
        /// Path to the JSON story file
        file: PathBuf,

        /// Maximum bar width of the frequency chart, in cells
        #[arg(short, long, default_value = "40")]
        width: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            file,
            name,
            health,
            accumulate_items,
            honor_health,
        } => commands::play::run(&file, &name, health, accumulate_items, honor_health),
        Commands::Stats { file, width } => commands::stats::run(&file, width),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
