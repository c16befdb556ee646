//! CLI struct definitions for the FitTrack command-line interface.
//!
//! Top-level clap types live here. Dispatch lives in `lib.rs` and the
//! per-group command modules.

use crate::commands::{account, catalog, meal, workout};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "fittrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "FitTrack is a local-first personal fitness tracker: accounts, workout logging, meal planning, and progress summaries from your terminal."
)]
pub(crate) struct Cli {
    /// Path to the account store (falls back to FITTRACK_DATA_FILE, then data/users.json).
    #[clap(long, global = true)]
    pub data_file: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Manage accounts and sessions.
    Account(account::AccountCli),
    /// Log and review workouts.
    Workout(workout::WorkoutCli),
    /// Build and review daily meal plans.
    Meal(meal::MealCli),
    /// Browse the remote exercise/nutrition catalog.
    Catalog(catalog::CatalogCli),
    /// Print the FitTrack version.
    Version,
}
