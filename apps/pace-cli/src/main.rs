//! # pace-cli
//!
//! Command-line interface for pace, the personal goal tracker.
//!
//! - `pace add/list/delete` — manage active goals
//! - `pace log/miss` — record daily progress or a missed day
//! - `pace weekly` — this week's progress for one goal
//! - `pace completed` — review finished goals

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pace_store::GoalStore;
use tracing_subscriber::EnvFilter;

/// pace — set goals, log progress, finish things.
#[derive(Parser)]
#[command(name = "pace", version, about)]
struct Cli {
    /// Goal file (defaults to $PACE_FILE, then ~/.pace/goals.json).
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new goal.
    Add {
        /// Goal name (a display label; duplicates are allowed).
        name: String,
        /// Total amount that completes the goal.
        #[arg(long)]
        total: f64,
        /// Weekly amount to aim for.
        #[arg(long)]
        weekly: f64,
        /// Unit label, e.g. "pages" or "km".
        #[arg(long, default_value = "units")]
        unit: String,
    },
    /// List active goals with this week's status.
    List,
    /// Log progress against a goal.
    Log {
        /// Goal name.
        name: String,
        /// Amount of progress made today.
        amount: f64,
    },
    /// Record a missed day with a reason.
    Miss {
        /// Goal name.
        name: String,
        /// Why no progress was made.
        #[arg(long)]
        reason: String,
    },
    /// Delete an active goal.
    Delete {
        /// Goal name.
        name: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Show this week's progress for a goal.
    Weekly {
        /// Goal name.
        name: String,
    },
    /// List completed goals, or show one goal's summary.
    Completed {
        /// Goal name.
        name: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interfere with command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let file = config::resolve_goal_file(cli.file.as_deref());
    let mut store = GoalStore::open(&file)?;

    match &cli.command {
        Commands::Add {
            name,
            total,
            weekly,
            unit,
        } => commands::goal::add(&mut store, name, *total, *weekly, unit),
        Commands::List => commands::goal::list(&store),
        Commands::Log { name, amount } => commands::log::log_progress(&mut store, name, *amount),
        Commands::Miss { name, reason } => commands::log::miss(&mut store, name, reason),
        Commands::Delete { name, yes } => commands::goal::delete(&mut store, name, *yes),
        Commands::Weekly { name } => commands::log::weekly(&store, name),
        Commands::Completed { name } => commands::goal::completed(&store, name.as_deref()),
    }
}
