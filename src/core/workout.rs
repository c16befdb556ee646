//! Workout entries and calorie estimation.
//!
//! A workout is created once when logged and appended to an account's
//! history. Calories are a pure function of type, duration, and intensity;
//! they are recomputed whenever duration or intensity changes.

use crate::core::time;
use crate::core::validate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

/// Calories per minute assumed for workout types missing from the rate table.
const DEFAULT_BURN_RATE: f64 = 5.0;

/// Type names that mark a quick-logged workout as cardio.
const CARDIO_HINTS: &[&str] = &["running", "cycling", "swimming", "walking", "dancing"];

/// Type names that mark a quick-logged workout as strength.
const STRENGTH_HINTS: &[&str] = &["push_ups", "squats", "deadlifts", "bench_press", "pull_ups"];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    Cardio,
    Strength,
    Flexibility,
}

impl WorkoutCategory {
    pub fn label(self) -> &'static str {
        match self {
            WorkoutCategory::Cardio => "cardio",
            WorkoutCategory::Strength => "strength",
            WorkoutCategory::Flexibility => "flexibility",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn multiplier(self) -> f64 {
        match self {
            Intensity::Low => 0.8,
            Intensity::Medium => 1.0,
            Intensity::High => 1.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

/// Average calories burned per minute, keyed by normalized workout type.
fn base_rate(workout_type: &str) -> f64 {
    match workout_type {
        // Cardio
        "running" => 12.0,
        "cycling" => 10.0,
        "swimming" => 11.0,
        "walking" => 5.0,
        "dancing" => 7.0,
        "jumping_jacks" => 8.0,
        // Strength
        "push_ups" => 6.0,
        "squats" => 7.0,
        "deadlifts" => 8.0,
        "bench_press" => 6.0,
        "pull_ups" => 8.0,
        "weight_lifting" => 7.0,
        // Flexibility
        "yoga" => 3.0,
        "stretching" => 2.0,
        "pilates" => 4.0,
        "tai_chi" => 3.0,
        _ => DEFAULT_BURN_RATE,
    }
}

/// A single logged workout session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub category: WorkoutCategory,
    pub duration: u32,
    pub intensity: Intensity,
    pub date: String,
    pub calories_burned: u32,
    #[serde(default)]
    pub notes: String,
}

impl Workout {
    pub fn new(
        workout_type: &str,
        category: WorkoutCategory,
        duration: u32,
        intensity: Intensity,
        date: Option<String>,
        calories_burned: Option<u32>,
        notes: Option<String>,
    ) -> Self {
        let mut workout = Self {
            workout_type: validate::snake_key(workout_type),
            category,
            duration,
            intensity,
            date: date.unwrap_or_else(time::today),
            calories_burned: 0,
            notes: notes.map(|n| n.trim().to_string()).unwrap_or_default(),
        };
        workout.calories_burned = calories_burned.unwrap_or_else(|| workout.estimate_calories());
        workout
    }

    /// Quick-log a workout: medium intensity, category detected from the
    /// type name, flexibility when nothing matches.
    pub fn quick(workout_type: &str, duration: u32) -> Self {
        let key = validate::snake_key(workout_type);
        let category = if CARDIO_HINTS.iter().any(|hint| key.contains(hint)) {
            WorkoutCategory::Cardio
        } else if STRENGTH_HINTS.iter().any(|hint| key.contains(hint)) {
            WorkoutCategory::Strength
        } else {
            WorkoutCategory::Flexibility
        };
        Self::new(workout_type, category, duration, Intensity::Medium, None, None, None)
    }

    /// Estimated calories: `round(base_rate x duration x multiplier)`,
    /// floored at 1.
    pub fn estimate_calories(&self) -> u32 {
        let total =
            (base_rate(&self.workout_type) * f64::from(self.duration) * self.intensity.multiplier())
                .round() as u32;
        total.max(1)
    }

    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
        self.calories_burned = self.estimate_calories();
    }

    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.intensity = intensity;
        self.calories_burned = self.estimate_calories();
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.trim().to_string();
    }

    /// Human-readable workout type (`bench_press` -> `Bench Press`).
    pub fn display_name(&self) -> String {
        validate::title_case(&self.workout_type.replace('_', " "))
    }

    pub fn summary(&self) -> JsonValue {
        json!({
            "type": self.display_name(),
            "category": self.category.label(),
            "duration": format!("{} minutes", self.duration),
            "intensity": validate::title_case(self.intensity.label()),
            "calories_burned": self.calories_burned,
            "date": self.date,
            "notes": if self.notes.is_empty() { "No notes added" } else { &self.notes },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_medium_estimate() {
        let workout = Workout::new("running", WorkoutCategory::Cardio, 30, Intensity::Medium, None, None, None);
        assert_eq!(workout.calories_burned, 360);
    }

    #[test]
    fn test_yoga_low_estimate() {
        let workout = Workout::new("yoga", WorkoutCategory::Flexibility, 60, Intensity::Low, None, None, None);
        assert_eq!(workout.calories_burned, 144);
    }

    #[test]
    fn test_unknown_type_uses_default_rate() {
        let workout = Workout::new("handstand", WorkoutCategory::Flexibility, 10, Intensity::Medium, None, None, None);
        assert_eq!(workout.calories_burned, 50);
    }

    #[test]
    fn test_explicit_calories_win_over_estimate() {
        let workout = Workout::new("running", WorkoutCategory::Cardio, 30, Intensity::Medium, None, Some(400), None);
        assert_eq!(workout.calories_burned, 400);
    }

    #[test]
    fn test_type_name_is_normalized() {
        let workout = Workout::new(" Bench Press ", WorkoutCategory::Strength, 20, Intensity::High, None, None, None);
        assert_eq!(workout.workout_type, "bench_press");
        assert_eq!(workout.display_name(), "Bench Press");
    }

    #[test]
    fn test_mutation_recomputes_calories() {
        let mut workout = Workout::new("running", WorkoutCategory::Cardio, 30, Intensity::Medium, None, None, None);
        workout.set_duration(60);
        assert_eq!(workout.calories_burned, 720);
        workout.set_intensity(Intensity::High);
        assert_eq!(workout.calories_burned, 936);
    }

    #[test]
    fn test_quick_category_detection() {
        assert_eq!(Workout::quick("running", 30).category, WorkoutCategory::Cardio);
        assert_eq!(Workout::quick("push ups", 10).category, WorkoutCategory::Strength);
        assert_eq!(Workout::quick("handstand", 5).category, WorkoutCategory::Flexibility);
        assert_eq!(Workout::quick("running", 30).intensity, Intensity::Medium);
    }

    #[test]
    fn test_summary_is_display_oriented() {
        let workout = Workout::new("push ups", WorkoutCategory::Strength, 10, Intensity::High, None, None, None);
        let summary = workout.summary();
        assert_eq!(summary["type"], "Push Ups");
        assert_eq!(summary["duration"], "10 minutes");
        assert_eq!(summary["intensity"], "High");
        assert_eq!(summary["notes"], "No notes added");
    }

    #[test]
    fn test_serde_round_trip() {
        let workout = Workout::new("cycling", WorkoutCategory::Cardio, 45, Intensity::High, Some("June 05, 2026".to_string()), None, Some("hill loop".to_string()));
        let value = serde_json::to_value(&workout).unwrap();
        assert_eq!(value["type"], "cycling");
        assert_eq!(value["intensity"], "high");
        let back: Workout = serde_json::from_value(value).unwrap();
        assert_eq!(back, workout);
    }
}
