//! CLI frontend for Hearthtale.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ht_adventure::AdventureConfig;
use ht_story::StoryConfig;

use commands::adventure::AdventureOptions;

#[derive(Parser)]
#[command(
    name = "hearth",
    about = "Hearthtale: keyword-driven text adventures and collaborative stories",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive adventure
    Adventure {
        /// Player name
        #[arg(short, long)]
        name: Option<String>,

        /// Genre: fantasy, sci-fi, mystery
        #[arg(short, long, default_value = "fantasy")]
        genre: String,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Activities required before the battle-ready flag is set
        #[arg(long, default_value = "0")]
        required_activities: u32,

        /// Print the status table after every reply
        #[arg(long)]
        hud: bool,

        /// Emit one JSON object per reply instead of styled text
        #[arg(long, conflicts_with = "hud")]
        json: bool,

        /// Write the transcript to this file on exit
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Write a story together
    Story {
        /// Storyteller name
        #[arg(short, long)]
        name: Option<String>,

        /// Genre: fantasy, sci-fi, mystery
        #[arg(short, long, default_value = "fantasy")]
        genre: String,

        /// RNG seed for reproducible prompts
        #[arg(short, long)]
        seed: Option<u64>,

        /// Export the story to this file on exit (.md, .json, or text)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Start a session from a setup query string (name=...&genre=...)
    Launch {
        /// Session mode: adventure or story
        mode: String,

        /// Query string, with or without the leading '?'
        #[arg(default_value = "")]
        query: String,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the available genres
    Genres,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Adventure {
            name,
            genre,
            seed,
            required_activities,
            hud,
            json,
            transcript,
        } => commands::parse_genre(&genre).and_then(|genre| {
            let mut config = AdventureConfig::default()
                .with_genre(genre)
                .with_required_activities(required_activities);
            if let Some(name) = name {
                config = config.with_name(&name);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let options = AdventureOptions {
                hud,
                json,
                transcript,
            };
            commands::adventure::run(config, &options)
        }),
        Commands::Story {
            name,
            genre,
            seed,
            transcript,
        } => commands::parse_genre(&genre).and_then(|genre| {
            let mut config = StoryConfig::default().with_genre(genre);
            if let Some(name) = name {
                config = config.with_name(&name);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::story::run(config, transcript.as_deref())
        }),
        Commands::Launch { mode, query, seed } => commands::launch::run(&mode, &query, seed),
        Commands::Genres => commands::genres::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
