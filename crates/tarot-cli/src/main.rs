//! CLI frontend for drawing tarot cards.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Shuffle a tarot deck and draw cards",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shuffle a deck and draw cards
    Draw {
        /// Deck to draw from: full, major, minor (or the full form label)
        #[arg(short, long, default_value = "Full Deck")]
        deck: String,

        /// Reversal mode: "Upright only" or "Upright and reversed"
        #[arg(short, long, default_value = "Upright and reversed")]
        reversal: String,

        /// Number of cards to draw (default: 8)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the draw as JSON
        #[arg(long)]
        json: bool,

        /// Base URL that card images are served from
        #[arg(long, env = "TAROT_IMAGE_BASE_URL")]
        image_base_url: Option<String>,
    },

    /// Answer a JSON draw request read from stdin
    Request {
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Base URL that card images are served from
        #[arg(long, env = "TAROT_IMAGE_BASE_URL")]
        image_base_url: Option<String>,
    },

    /// List the available deck and reversal options
    Options,

    /// Show the cards of a deck variant
    Catalog {
        /// Deck to list: full, major, minor (or the full form label)
        #[arg(short, long, default_value = "Full Deck")]
        deck: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw {
            deck,
            reversal,
            count,
            seed,
            json,
            image_base_url,
        } => commands::draw::run(
            &deck,
            &reversal,
            count,
            seed,
            json,
            image_base_url.as_deref(),
        ),
        Commands::Request {
            seed,
            image_base_url,
        } => commands::request::run(seed, image_base_url.as_deref()),
        Commands::Options => commands::options::run(),
        Commands::Catalog { deck } => commands::catalog::run(&deck),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
