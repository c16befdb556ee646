//! FitTrack: a local-first personal fitness tracker for the terminal.
//!
//! Accounts, workout logging, meal planning, and progress summaries, all
//! persisted to a single local JSON store. Reference exercise and nutrition
//! data can be pulled from the wger catalog, with static fallbacks when the
//! network is unavailable.
//!
//! # Architecture
//!
//! - `core`: domain records (accounts, workouts, meal plans) with their
//!   derived-metric calculators, plus the credential/store manager that owns
//!   the on-disk JSON store.
//! - `commands`: one module per CLI command group, each owning its clap tree
//!   and dispatch.
//! - `catalog`: blocking client for the remote exercise/nutrition catalog.
//!
//! The store is read in full and written in full on every mutation, with no
//! locking. That is deliberate: FitTrack is a single-process, single-user
//! local tool, and last-writer-wins is the documented semantics.

pub mod catalog;
mod cli;
pub mod commands;
pub mod core;

use crate::cli::{Cli, Command};
use crate::core::error::FitnessError;
use crate::core::store::UserStore;
use clap::Parser;
use std::path::PathBuf;

/// Store path used when neither the flag nor the environment provides one.
pub const DEFAULT_DATA_FILE: &str = "data/users.json";

/// Environment variable consulted for the store path.
pub const DATA_FILE_ENV: &str = "FITTRACK_DATA_FILE";

fn resolve_data_file(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var(DATA_FILE_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

pub fn run() -> Result<(), FitnessError> {
    let cli = Cli::parse();
    let Cli { data_file, command } = cli;

    match command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Catalog(catalog_cli) => commands::catalog::run_catalog_cli(catalog_cli),
        Command::Account(account_cli) => {
            let mut store = UserStore::open(resolve_data_file(data_file))?;
            commands::account::run_account_cli(&mut store, account_cli)
        }
        Command::Workout(workout_cli) => {
            let mut store = UserStore::open(resolve_data_file(data_file))?;
            commands::workout::run_workout_cli(&mut store, workout_cli)
        }
        Command::Meal(meal_cli) => {
            let mut store = UserStore::open(resolve_data_file(data_file))?;
            commands::meal::run_meal_cli(&mut store, meal_cli)
        }
    }
}
