use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::board::{handle_act, handle_board, handle_deadlines, handle_drag};

#[derive(Parser)]
#[command(name = "cotai")]
#[command(about = "CotAi Licitação Hub - bid tracking board")]
#[command(version)]
struct Cli {
    /// Evaluate deadlines as of this date (YYYY-MM-DD) instead of now
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tracking board
    Board {
        /// Only show bids whose title, organization or number match
        #[arg(short, long)]
        query: Option<String>,
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
    /// List bids with deadlines coming up
    Deadlines {
        /// Window in days (defaults to COTAI_UPCOMING_WINDOW_DAYS)
        #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..))]
        within: Option<i64>,
    },
    /// Apply a card action (analisar, revisado, assinar, ganhou, perdeu)
    Act {
        /// Bid ID
        bid_id: String,
        /// Action name
        action: String,
        /// Sign-off credential, required by "assinar"
        #[arg(short, long)]
        credential: Option<String>,
    },
    /// Drag a bid to another column
    Drag {
        /// Bid ID
        bid_id: String,
        /// Destination column key, e.g. "sent" or "won"
        column: String,
        /// Position within the destination column
        #[arg(short, long)]
        position: Option<usize>,
    },
}

fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    cotai_cli::logging::init_logging();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn handle_command(cli: Cli) -> anyhow::Result<()> {
    let today = cli.today.as_deref();
    match cli.command {
        Commands::Board { query, json } => handle_board(query, json, today),
        Commands::Deadlines { within } => handle_deadlines(within, today),
        Commands::Act {
            bid_id,
            action,
            credential,
        } => handle_act(&bid_id, &action, credential, today),
        Commands::Drag {
            bid_id,
            column,
            position,
        } => handle_drag(&bid_id, &column, position, today),
    }
}
