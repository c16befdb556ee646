use crate::catalog::{self, CatalogClient};
use crate::core::error::FitnessError;
use crate::core::output;
use crate::core::validate;
use clap::{Args, Subcommand};
use colored::Colorize;

/// Result-count bound shared by the listing subcommands.
fn result_limit(raw: &str) -> Result<u32, FitnessError> {
    validate::choice_in_range(raw, 1, 20)
}

#[derive(Args, Debug)]
pub struct CatalogCli {
    #[clap(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List exercise categories from the remote catalog.
    Categories,
    /// List exercises for a category.
    Exercises {
        /// Category id (see `catalog categories`).
        #[clap(long)]
        category: u32,
        #[clap(long, default_value = "5", value_parser = result_limit)]
        limit: u32,
    },
    /// Look up nutrition facts for a food.
    Food {
        #[clap(long)]
        query: String,
        #[clap(long, default_value = "5", value_parser = result_limit)]
        limit: u32,
    },
}

pub fn run_catalog_cli(cli: CatalogCli) -> Result<(), FitnessError> {
    let client = CatalogClient::new()?;
    match cli.command {
        CatalogCommand::Categories => {
            let categories = match client.exercise_categories() {
                Ok(categories) if !categories.is_empty() => categories,
                Ok(_) => catalog::fallback_categories(),
                Err(err) => {
                    println!("{} Catalog unavailable ({}); using built-in list", "▸".bright_yellow(), err);
                    catalog::fallback_categories()
                }
            };
            for category in &categories {
                println!("  {:>3}  {}", category.id, category.name);
            }
            println!("{} categories", categories.len());
        }
        CatalogCommand::Exercises { category, limit } => {
            let exercises = match client.exercises_by_category(category, limit) {
                Ok(exercises) if !exercises.is_empty() => exercises,
                Ok(_) => {
                    println!("No exercises found for category {}", category);
                    return Ok(());
                }
                Err(err) => {
                    println!("{} Catalog unavailable ({}); using built-in list", "▸".bright_yellow(), err);
                    catalog::fallback_exercises()
                }
            };
            for exercise in &exercises {
                let equipment = if exercise.equipment.is_empty() {
                    "no equipment".to_string()
                } else {
                    exercise.equipment.join(", ")
                };
                println!(
                    "  {} [{}] ({})",
                    exercise.name.bold(),
                    exercise.category,
                    equipment
                );
                println!("      {}", output::clip(&exercise.description, 96));
            }
        }
        CatalogCommand::Food { query, limit } => {
            for item in client.food_data(&query, limit as usize) {
                println!(
                    "  {} — {} cal/100g (protein {}g, carbs {}g, fat {}g)",
                    item.name.bold(),
                    item.calories_per_100g,
                    item.protein,
                    item.carbs,
                    item.fat
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_limit_bounds() {
        assert_eq!(result_limit("1").unwrap(), 1);
        assert_eq!(result_limit("20").unwrap(), 20);
        assert!(result_limit("0").is_err());
        assert!(result_limit("21").is_err());
        assert!(result_limit("five").is_err());
    }
}
