use crate::commands::resolve_user;
use crate::core::error::FitnessError;
use crate::core::output;
use crate::core::store::UserStore;
use crate::core::validate;
use crate::core::workout::{Intensity, Workout, WorkoutCategory};
use clap::{Args, Subcommand};
use colored::Colorize;

#[derive(Args, Debug)]
pub struct WorkoutCli {
    #[clap(subcommand)]
    command: WorkoutCommand,
}

#[derive(Subcommand, Debug)]
enum WorkoutCommand {
    /// Log a completed workout.
    Log {
        #[clap(long)]
        username: Option<String>,
        /// Workout type (e.g. "running", "bench press").
        #[clap(long = "type", value_name = "TYPE")]
        workout_type: String,
        #[clap(long, value_enum)]
        category: WorkoutCategory,
        /// Duration in minutes.
        #[clap(long, value_parser = validate::duration_minutes)]
        duration: u32,
        #[clap(long, value_enum, default_value = "medium")]
        intensity: Intensity,
        /// Calories burned; estimated from type/duration/intensity when omitted.
        #[clap(long)]
        calories: Option<u32>,
        #[clap(long)]
        notes: Option<String>,
        /// Workout date (defaults to today).
        #[clap(long)]
        date: Option<String>,
    },
    /// Quick-log a workout: medium intensity, auto-detected category.
    Quick {
        #[clap(long)]
        username: Option<String>,
        #[clap(long = "type", value_name = "TYPE")]
        workout_type: String,
        #[clap(long, value_parser = validate::duration_minutes)]
        duration: u32,
    },
    /// List logged workouts.
    List {
        #[clap(long)]
        username: Option<String>,
    },
}

pub fn run_workout_cli(store: &mut UserStore, cli: WorkoutCli) -> Result<(), FitnessError> {
    match cli.command {
        WorkoutCommand::Log {
            username,
            workout_type,
            category,
            duration,
            intensity,
            calories,
            notes,
            date,
        } => {
            let user = resolve_user(store, username)?;
            let workout = Workout::new(&workout_type, category, duration, intensity, date, calories, notes);
            store.append_workout(&user, &workout)?;
            println!(
                "{} Logged {} for {}: {} minutes, {} calories",
                "✓".green(),
                workout.display_name(),
                user,
                workout.duration,
                workout.calories_burned
            );
        }
        WorkoutCommand::Quick {
            username,
            workout_type,
            duration,
        } => {
            let user = resolve_user(store, username)?;
            let workout = Workout::quick(&workout_type, duration);
            store.append_workout(&user, &workout)?;
            println!(
                "{} Logged {} ({}) for {}: {} minutes, {} calories",
                "✓".green(),
                workout.display_name(),
                workout.category.label(),
                user,
                workout.duration,
                workout.calories_burned
            );
        }
        WorkoutCommand::List { username } => {
            let user = resolve_user(store, username)?;
            let Some(record) = store.record(Some(&user)) else {
                println!("{} Account not found: {}", "✗".red(), user);
                return Ok(());
            };
            if record.account.workouts.is_empty() {
                println!("No workouts logged yet.");
                return Ok(());
            }
            for workout in &record.account.workouts {
                println!("  {}", output::workout_line(workout));
            }
            println!(
                "{} workouts, {} minutes total (weekly goal: {})",
                record.account.workouts.len(),
                record.account.total_workout_minutes(),
                record.account.weekly_workout_goal
            );
        }
    }
    Ok(())
}
