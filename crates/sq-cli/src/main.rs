//! CLI frontend for Saint Quest.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "saint-quest",
    about = "Saint Quest: walk in the footsteps of the saints",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory containing profiles.json and quests.json (default: built-in content)
    #[arg(short, long, global = true, env = "SAINT_QUEST_DATA")]
    data: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable heroes
    Profiles,

    /// Validate the content tables and report issues
    Check,

    /// List the checkpoints of a hero's quest
    Quests {
        /// Profile id (e.g. francis)
        profile: String,

        /// Print the checkpoints as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play in the terminal, one command per line
    Play {
        /// Start straight away with this profile
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Launch the interactive terminal UI
    Tui,
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the screen; logging would corrupt it.
    if !matches!(cli.command, Commands::Tui) {
        init_logging(cli.verbose);
    }

    let data = cli.data.as_deref();
    let result = match cli.command {
        Commands::Profiles => commands::profiles::run(data),
        Commands::Check => commands::check::run(data),
        Commands::Quests { profile, json } => commands::quests::run(data, &profile, json),
        Commands::Play { profile } => commands::play::run(data, profile.as_deref()),
        Commands::Tui => commands::load_engine(data).and_then(tui::run),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
