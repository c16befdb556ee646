//! Daily meal plans and nutrition tracking.
//!
//! A meal plan is mutable while it is being built (meals can be added,
//! replaced, or removed per slot) and is serialized into an account's meal
//! history once saved. Calorie totals come from a fixed per-food table and
//! are classified against the plan's target.

use crate::core::time;
use crate::core::validate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Calories assumed for food items missing from the estimate table.
const DEFAULT_FOOD_CALORIES: u32 = 250;

/// Estimates within this many calories of target count as on track.
const ON_TRACK_TOLERANCE: i64 = 100;

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    /// The slots that make a plan complete. Snack is optional.
    pub const MAIN_SLOTS: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Endurance,
}

impl NutritionGoal {
    /// Default daily calorie target for this goal.
    pub fn default_target_calories(self) -> u32 {
        match self {
            NutritionGoal::WeightLoss => 1800,
            NutritionGoal::MuscleGain => 2500,
            NutritionGoal::Maintenance => 2200,
            NutritionGoal::Endurance => 2800,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NutritionGoal::WeightLoss => "weight_loss",
            NutritionGoal::MuscleGain => "muscle_gain",
            NutritionGoal::Maintenance => "maintenance",
            NutritionGoal::Endurance => "endurance",
        }
    }
}

/// Average calories per serving, keyed by normalized food name.
fn food_calories(food_key: &str) -> u32 {
    match food_key {
        // Breakfast items
        "oatmeal" => 150,
        "eggs" => 140,
        "toast" => 80,
        "pancakes" => 200,
        "cereal" => 120,
        "yogurt" => 100,
        "fruit" => 80,
        "smoothie" => 180,
        // Lunch items
        "salad" => 200,
        "sandwich" => 300,
        "soup" => 150,
        "pasta" => 350,
        "rice_bowl" => 400,
        "wrap" => 280,
        "pizza" => 450,
        "burger" => 500,
        // Dinner items
        "chicken" => 300,
        "fish" => 250,
        "beef" => 400,
        "pork" => 350,
        "vegetarian_curry" => 320,
        "stir_fry" => 280,
        "salmon" => 300,
        // Snacks
        "apple" => 80,
        "nuts" => 180,
        "protein_bar" => 200,
        "chips" => 150,
        "crackers" => 120,
        "cheese" => 100,
        "banana" => 90,
        _ => DEFAULT_FOOD_CALORIES,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieStatus {
    OnTrack,
    OverTarget,
    UnderTarget,
}

impl CalorieStatus {
    pub fn label(self) -> &'static str {
        match self {
            CalorieStatus::OnTrack => "on_track",
            CalorieStatus::OverTarget => "over_target",
            CalorieStatus::UnderTarget => "under_target",
        }
    }
}

/// Estimated calories measured against the plan's target.
#[derive(Clone, Debug, PartialEq)]
pub struct CalorieReport {
    pub estimated: u32,
    pub target: u32,
    pub difference: i64,
    pub status: CalorieStatus,
    pub message: String,
    pub percent_of_target: f64,
}

/// One day's meal plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub day: u32,
    pub date: String,
    #[serde(default)]
    pub meals: BTreeMap<MealSlot, String>,
    pub nutrition_goal: NutritionGoal,
    pub target_calories: u32,
    #[serde(default)]
    pub notes: String,
    pub created_time: String,
}

impl MealPlan {
    pub fn new(
        day: u32,
        date: Option<String>,
        nutrition_goal: NutritionGoal,
        target_calories: Option<u32>,
        notes: &str,
    ) -> Self {
        Self {
            day,
            date: date.unwrap_or_else(time::today),
            meals: BTreeMap::new(),
            nutrition_goal,
            target_calories: target_calories
                .unwrap_or_else(|| nutrition_goal.default_target_calories()),
            notes: notes.to_string(),
            created_time: time::clock_time(),
        }
    }

    /// Set the food item for a slot. Replaces any existing item.
    pub fn set_meal(&mut self, slot: MealSlot, food_item: &str) {
        self.meals.insert(slot, validate::title_case(food_item));
    }

    /// Remove a slot's food item. Returns whether anything was removed.
    pub fn remove_meal(&mut self, slot: MealSlot) -> bool {
        self.meals.remove(&slot).is_some()
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&str> {
        self.meals.get(&slot).map(String::as_str)
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    /// True when breakfast, lunch, and dinner are all occupied.
    pub fn is_complete(&self) -> bool {
        MealSlot::MAIN_SLOTS
            .iter()
            .all(|slot| self.meals.contains_key(slot))
    }

    /// The unoccupied subset of breakfast/lunch/dinner.
    pub fn missing_main_meals(&self) -> Vec<&'static str> {
        MealSlot::MAIN_SLOTS
            .iter()
            .filter(|slot| !self.meals.contains_key(slot))
            .map(|slot| slot.label())
            .collect()
    }

    /// Estimated daily total: sum of per-food table values over occupied
    /// slots, with a fixed default for unrecognized items.
    pub fn estimate_calories(&self) -> u32 {
        self.meals
            .values()
            .map(|food_item| food_calories(&validate::snake_key(food_item)))
            .sum()
    }

    /// Classify the estimated total against the target. Exactly 100 over or
    /// under still counts as on track.
    pub fn calorie_status(&self) -> CalorieReport {
        let estimated = self.estimate_calories();
        let difference = i64::from(estimated) - i64::from(self.target_calories);

        let (status, message) = if difference.abs() <= ON_TRACK_TOLERANCE {
            (
                CalorieStatus::OnTrack,
                "Perfect! You're on track with your calorie goal!".to_string(),
            )
        } else if difference > ON_TRACK_TOLERANCE {
            (
                CalorieStatus::OverTarget,
                format!("Over target by {} calories. Consider lighter meals.", difference),
            )
        } else {
            (
                CalorieStatus::UnderTarget,
                format!("Under target by {} calories. Add a healthy snack!", -difference),
            )
        };

        let percent_of_target = if self.target_calories == 0 {
            0.0
        } else {
            (f64::from(estimated) / f64::from(self.target_calories) * 1000.0).round() / 10.0
        };

        CalorieReport {
            estimated,
            target: self.target_calories,
            difference,
            status,
            message,
            percent_of_target,
        }
    }

    /// Advice derived from the goal, the meal count, and the calorie status.
    pub fn recommendations(&self) -> Vec<String> {
        let mut recommendations = Vec::new();

        match self.nutrition_goal {
            NutritionGoal::WeightLoss => {
                recommendations.push("Focus on protein-rich foods to maintain muscle".to_string());
                recommendations
                    .push("Include plenty of vegetables for nutrients and fiber".to_string());
            }
            NutritionGoal::MuscleGain => {
                recommendations.push("Aim for protein with every meal".to_string());
                recommendations.push("Include complex carbs for energy".to_string());
            }
            NutritionGoal::Endurance => {
                recommendations
                    .push("Prioritize carbohydrates for sustained energy".to_string());
                recommendations.push("Focus on hydration throughout the day".to_string());
            }
            NutritionGoal::Maintenance => {}
        }

        match self.meal_count() {
            0..=2 => recommendations
                .push("Consider adding more meals for consistent energy".to_string()),
            3 => recommendations
                .push("Good meal frequency! Consider adding a healthy snack".to_string()),
            _ => {}
        }

        match self.calorie_status().status {
            CalorieStatus::UnderTarget => recommendations
                .push("Add nutrient-dense snacks to meet your calorie goal".to_string()),
            CalorieStatus::OverTarget => recommendations
                .push("Consider substituting some items with lighter alternatives".to_string()),
            CalorieStatus::OnTrack => {}
        }

        recommendations
    }
}
