//! examgrade CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "examgrade", version, about = "Answer-key grading for two-day exams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade an answer sheet against an edition's keys
    Grade {
        /// Path to a .toml key file or directory
        #[arg(long)]
        keys: PathBuf,

        /// Edition identifier (e.g. "2024")
        #[arg(long)]
        edition: String,

        /// Day-1 booklet color
        #[arg(long)]
        day1_color: String,

        /// Day-2 booklet color
        #[arg(long)]
        day2_color: String,

        /// Foreign-language track: english or spanish
        #[arg(long)]
        language: String,

        /// Path to the candidate answers file (two-line text format)
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Save this configuration under the given name
        #[arg(long)]
        save: Option<String>,

        /// Saved-configuration store path (defaults to the user config dir)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// List available editions and booklet colors
    Editions {
        /// Path to a .toml key file or directory
        #[arg(long)]
        keys: PathBuf,
    },

    /// Validate answer-key TOML files
    Validate {
        /// Path to a .toml key file or directory
        #[arg(long)]
        keys: PathBuf,
    },

    /// Manage saved grading configurations
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },

    /// Create a starter key file and example answers
    Init,
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved configurations, most recent first
    List {
        /// Saved-configuration store path
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Print one saved configuration, including its answers text
    Show {
        /// Position in the list (0 = most recent)
        index: usize,

        /// Saved-configuration store path
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Delete one saved configuration
    Delete {
        /// Position in the list (0 = most recent)
        index: usize,

        /// Saved-configuration store path
        #[arg(long)]
        store: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examgrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            keys,
            edition,
            day1_color,
            day2_color,
            language,
            answers,
            format,
            save,
            store,
        } => commands::grade::execute(
            keys, edition, day1_color, day2_color, language, answers, format, save, store,
        ),
        Commands::Editions { keys } => commands::editions::execute(keys),
        Commands::Validate { keys } => commands::validate::execute(keys),
        Commands::Saved { action } => match action {
            SavedAction::List { store } => commands::saved::list(store),
            SavedAction::Show { index, store } => commands::saved::show(index, store),
            SavedAction::Delete { index, store } => commands::saved::delete(index, store),
        },
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
