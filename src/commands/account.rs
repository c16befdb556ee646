use crate::commands::{report, resolve_user};
use crate::core::account::Account;
use crate::core::error::FitnessError;
use crate::core::store::{ProfileField, UserStore};
use crate::core::validate;
use clap::{Args, Subcommand};
use colored::Colorize;

#[derive(Args, Debug)]
pub struct AccountCli {
    #[clap(subcommand)]
    command: AccountCommand,
}

#[derive(Subcommand, Debug)]
enum AccountCommand {
    /// Create a new account and start a session.
    Register {
        #[clap(long, value_parser = validate::username)]
        username: String,
        #[clap(long)]
        password: String,
        /// Display name.
        #[clap(long, value_parser = validate::display_name)]
        name: String,
        #[clap(long, value_parser = validate::age)]
        age: u32,
        /// Current weight in kg.
        #[clap(long, value_parser = validate::weight_kg)]
        weight: f64,
        /// Goal weight in kg (defaults to current weight).
        #[clap(long, value_parser = validate::weight_kg)]
        target_weight: Option<f64>,
        /// Workouts per week.
        #[clap(long, default_value = "3", value_parser = validate::weekly_goal)]
        weekly_goal: u32,
    },
    /// Log in and start a session.
    Login {
        #[clap(long, value_parser = validate::username)]
        username: String,
        #[clap(long)]
        password: String,
    },
    /// End the active session.
    Logout,
    /// Show the profile summary for a user (or the session user).
    Show {
        #[clap(long)]
        username: Option<String>,
    },
    /// Update current weight.
    SetWeight {
        #[clap(long)]
        username: Option<String>,
        #[clap(long, value_parser = validate::weight_kg)]
        weight: f64,
    },
    /// Update target weight.
    SetTarget {
        #[clap(long)]
        username: Option<String>,
        #[clap(long, value_parser = validate::weight_kg)]
        weight: f64,
    },
    /// Update the weekly workout goal.
    SetGoal {
        #[clap(long)]
        username: Option<String>,
        #[clap(long, value_parser = validate::weekly_goal)]
        goal: u32,
    },
}

pub fn run_account_cli(store: &mut UserStore, cli: AccountCli) -> Result<(), FitnessError> {
    match cli.command {
        AccountCommand::Register {
            username,
            password,
            name,
            age,
            weight,
            target_weight,
            weekly_goal,
        } => {
            let account = Account::new(&username, &name, age, weight, target_weight, weekly_goal);
            report(store.register(account, &password));
        }
        AccountCommand::Login { username, password } => {
            let outcome = store.login(&username, &password);
            if outcome.0 {
                store.touch_last_login();
            }
            report(outcome);
        }
        AccountCommand::Logout => {
            report(store.logout());
        }
        AccountCommand::Show { username } => {
            let user = resolve_user(store, username)?;
            match store.record(Some(&user)) {
                Some(record) => {
                    println!("{}", serde_json::to_string_pretty(&record.account.profile_summary())?);
                    let progress = record.account.weight_progress();
                    println!("{} {}", "▸".bright_cyan(), progress.message);
                }
                None => println!("{} Account not found: {}", "✗".red(), user),
            }
        }
        AccountCommand::SetWeight { username, weight } => {
            let user = resolve_user(store, username)?;
            store.update_field(&user, ProfileField::Weight(weight))?;
            println!("{} Weight updated to {}kg for {}", "✓".green(), weight, user);
        }
        AccountCommand::SetTarget { username, weight } => {
            let user = resolve_user(store, username)?;
            store.update_field(&user, ProfileField::TargetWeight(weight))?;
            println!("{} Target weight updated to {}kg for {}", "✓".green(), weight, user);
        }
        AccountCommand::SetGoal { username, goal } => {
            let user = resolve_user(store, username)?;
            store.update_field(&user, ProfileField::WeeklyGoal(goal))?;
            println!("{} Weekly goal updated to {} workouts for {}", "✓".green(), goal, user);
        }
    }
    Ok(())
}
