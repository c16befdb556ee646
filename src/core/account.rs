//! Account profiles and progress summaries.
//!
//! The username is immutable once created and is the sole lookup key into
//! the store. Everything else on the profile can change over time.

use crate::core::meal::MealPlan;
use crate::core::time;
use crate::core::workout::Workout;
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};
use std::collections::BTreeMap;

/// A user profile plus their workout and meal histories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub target_weight: f64,
    pub weekly_workout_goal: u32,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub meals: Vec<MealPlan>,
    pub created_date: String,
    pub last_login: String,
}

/// Weight position relative to the profile's target.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightProgress {
    pub current: f64,
    pub target: f64,
    pub difference: f64,
    pub direction: &'static str,
    pub at_goal: bool,
    pub message: String,
}

impl Account {
    pub fn new(
        username: &str,
        name: &str,
        age: u32,
        weight: f64,
        target_weight: Option<f64>,
        weekly_workout_goal: u32,
    ) -> Self {
        Self {
            username: username.to_string(),
            name: name.to_string(),
            age,
            weight,
            target_weight: target_weight.unwrap_or(weight),
            weekly_workout_goal,
            workouts: Vec::new(),
            meals: Vec::new(),
            created_date: time::today(),
            last_login: time::now_stamp(),
        }
    }

    pub fn total_workout_minutes(&self) -> u32 {
        self.workouts.iter().map(|workout| workout.duration).sum()
    }

    /// Workout counts keyed by category label.
    pub fn workouts_by_category(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for workout in &self.workouts {
            *counts.entry(workout.category.label()).or_insert(0) += 1;
        }
        counts
    }

    /// Position relative to the target weight. At-goal uses exact equality;
    /// no tolerance is applied.
    #[allow(clippy::float_cmp)]
    pub fn weight_progress(&self) -> WeightProgress {
        let difference = (self.weight - self.target_weight).abs();
        let direction = if self.weight > self.target_weight {
            "lose"
        } else {
            "gain"
        };
        let at_goal = self.weight == self.target_weight;
        let message = if at_goal {
            "Congratulations! You're at your target weight!".to_string()
        } else {
            format!("Keep going! You need to {} {}kg to reach your goal.", direction, difference)
        };
        WeightProgress {
            current: self.weight,
            target: self.target_weight,
            difference,
            direction,
            at_goal,
            message,
        }
    }

    pub fn profile_summary(&self) -> JsonValue {
        let progress = self.weight_progress();
        json!({
            "basic_info": {
                "username": self.username,
                "name": self.name,
                "age": self.age,
                "member_since": self.created_date,
                "last_active": self.last_login,
            },
            "fitness_data": {
                "current_weight": self.weight,
                "target_weight": self.target_weight,
                "weekly_goal": self.weekly_workout_goal,
                "weight_progress": {
                    "direction": progress.direction,
                    "difference": progress.difference,
                    "at_goal": progress.at_goal,
                    "message": progress.message,
                },
            },
            "activity_stats": {
                "total_workouts": self.workouts.len(),
                "total_workout_time": self.total_workout_minutes(),
                "workouts_by_category": self.workouts_by_category(),
                "meal_plans_saved": self.meals.len(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workout::{Intensity, WorkoutCategory};

    fn account() -> Account {
        Account::new("annak", "Anna K", 29, 70.0, Some(65.0), 4)
    }

    #[test]
    fn test_target_defaults_to_current_weight() {
        let account = Account::new("bo", "Bo Li", 40, 82.5, None, 3);
        assert!((account.target_weight - 82.5).abs() < f64::EPSILON);
        assert!(account.weight_progress().at_goal);
    }

    #[test]
    fn test_direction_and_difference() {
        let progress = account().weight_progress();
        assert_eq!(progress.direction, "lose");
        assert!((progress.difference - 5.0).abs() < f64::EPSILON);
        assert!(!progress.at_goal);

        let mut gaining = account();
        gaining.weight = 60.0;
        assert_eq!(gaining.weight_progress().direction, "gain");
    }

    #[test]
    fn test_at_goal_requires_exact_equality() {
        let mut account = account();
        account.weight = 65.0 + 1e-9;
        assert!(!account.weight_progress().at_goal);
        account.weight = 65.0;
        assert!(account.weight_progress().at_goal);
    }

    #[test]
    fn test_activity_stats() {
        let mut account = account();
        account.workouts.push(Workout::new("running", WorkoutCategory::Cardio, 30, Intensity::Medium, None, None, None));
        account.workouts.push(Workout::new("cycling", WorkoutCategory::Cardio, 45, Intensity::Low, None, None, None));
        account.workouts.push(Workout::new("yoga", WorkoutCategory::Flexibility, 20, Intensity::Low, None, None, None));

        assert_eq!(account.total_workout_minutes(), 95);
        let counts = account.workouts_by_category();
        assert_eq!(counts.get("cardio"), Some(&2));
        assert_eq!(counts.get("flexibility"), Some(&1));
        assert_eq!(counts.get("strength"), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut account = account();
        account.workouts.push(Workout::new("squats", WorkoutCategory::Strength, 15, Intensity::High, None, None, None));
        let value = serde_json::to_value(&account).unwrap();
        let back: Account = serde_json::from_value(value).unwrap();
        assert_eq!(back, account);
    }
}
