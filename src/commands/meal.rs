use crate::commands::resolve_user;
use crate::core::error::FitnessError;
use crate::core::meal::{MealPlan, MealSlot, NutritionGoal};
use crate::core::output;
use crate::core::store::UserStore;
use clap::{Args, Subcommand};
use colored::Colorize;

#[derive(Args, Debug)]
pub struct MealCli {
    #[clap(subcommand)]
    command: MealCommand,
}

#[derive(Subcommand, Debug)]
enum MealCommand {
    /// Build a daily meal plan and save it to the account.
    Plan {
        #[clap(long)]
        username: Option<String>,
        /// Day number in the plan sequence.
        #[clap(long)]
        day: u32,
        #[clap(long, value_enum, default_value = "maintenance")]
        goal: NutritionGoal,
        /// Daily calorie target; defaults per goal when omitted.
        #[clap(long)]
        target_calories: Option<u32>,
        #[clap(long)]
        breakfast: Option<String>,
        #[clap(long)]
        lunch: Option<String>,
        #[clap(long)]
        dinner: Option<String>,
        #[clap(long)]
        snack: Option<String>,
        #[clap(long, default_value = "")]
        notes: String,
        /// Plan date (defaults to today).
        #[clap(long)]
        date: Option<String>,
    },
    /// List saved meal plans.
    List {
        #[clap(long)]
        username: Option<String>,
    },
}

pub fn run_meal_cli(store: &mut UserStore, cli: MealCli) -> Result<(), FitnessError> {
    match cli.command {
        MealCommand::Plan {
            username,
            day,
            goal,
            target_calories,
            breakfast,
            lunch,
            dinner,
            snack,
            notes,
            date,
        } => {
            let user = resolve_user(store, username)?;
            let mut plan = MealPlan::new(day, date, goal, target_calories, &notes);
            let slots = [
                (MealSlot::Breakfast, breakfast),
                (MealSlot::Lunch, lunch),
                (MealSlot::Dinner, dinner),
                (MealSlot::Snack, snack),
            ];
            for (slot, food_item) in slots {
                if let Some(food_item) = food_item {
                    plan.set_meal(slot, &food_item);
                }
            }

            let status = plan.calorie_status();
            store.append_meal_plan(&user, &plan)?;

            println!(
                "{} Saved day {} plan for {} ({} meals, goal: {})",
                "✓".green(),
                plan.day,
                user,
                plan.meal_count(),
                plan.nutrition_goal.label()
            );
            println!(
                "  {} estimated / {} target ({}%) — {}",
                status.estimated, status.target, status.percent_of_target, status.message
            );
            if !plan.is_complete() {
                println!(
                    "  {} Missing main meals: {}",
                    "▸".bright_yellow(),
                    plan.missing_main_meals().join(", ")
                );
            }
            for recommendation in plan.recommendations() {
                println!("  {} {}", "▸".bright_cyan(), recommendation);
            }
        }
        MealCommand::List { username } => {
            let user = resolve_user(store, username)?;
            let Some(record) = store.record(Some(&user)) else {
                println!("{} Account not found: {}", "✗".red(), user);
                return Ok(());
            };
            if record.account.meals.is_empty() {
                println!("No meal plans saved yet.");
                return Ok(());
            }
            for plan in &record.account.meals {
                println!("  {}", output::meal_plan_line(plan));
            }
            println!("{} meal plans saved", record.account.meals.len());
        }
    }
    Ok(())
}
