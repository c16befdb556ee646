//! CLI command groups. Each module owns its clap tree and dispatch.

pub mod account;
pub mod catalog;
pub mod meal;
pub mod workout;

use crate::core::error::FitnessError;
use crate::core::store::{Outcome, UserStore};
use colored::Colorize;

/// Resolve the target username: explicit flag first, active session second.
pub(crate) fn resolve_user(
    store: &UserStore,
    username: Option<String>,
) -> Result<String, FitnessError> {
    username
        .or_else(|| store.current_user().map(str::to_string))
        .ok_or_else(|| {
            FitnessError::NotFound("no --username given and no active session".to_string())
        })
}

/// Print an outcome with a success/failure marker.
pub(crate) fn report(outcome: Outcome) {
    let (ok, message) = outcome;
    if ok {
        println!("{} {}", "✓".green(), message);
    } else {
        println!("{} {}", "✗".red(), message);
    }
}
