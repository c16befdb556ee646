//! Terminal rendering for listing surfaces.
//!
//! One line per record, bounded free text. Coloring is applied here so the
//! command modules only decide what to list.

use crate::core::meal::MealPlan;
use crate::core::workout::Workout;
use colored::Colorize;

/// Longest notes fragment shown in a workout line.
const NOTES_PREVIEW_CHARS: usize = 48;

/// Flatten whitespace and bound `text` to `max_chars`, marking overflow.
pub fn clip(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars).collect();
    format!("{}...", kept)
}

/// One-line rendering of a logged workout.
pub fn workout_line(workout: &Workout) -> String {
    let mut line = format!(
        "{} {} [{}] {}min {} ({} cal)",
        workout.date.bright_black(),
        workout.display_name().bold(),
        workout.category.label(),
        workout.duration,
        workout.intensity.label(),
        workout.calories_burned,
    );
    if !workout.notes.is_empty() {
        line.push_str(" - ");
        line.push_str(&clip(&workout.notes, NOTES_PREVIEW_CHARS));
    }
    line
}

/// One-line rendering of a saved meal plan with its calorie status.
pub fn meal_plan_line(plan: &MealPlan) -> String {
    let status = plan.calorie_status();
    let meals = if plan.meals.is_empty() {
        "no meals planned".to_string()
    } else {
        plan.meals
            .iter()
            .map(|(slot, food_item)| format!("{}: {}", slot.label(), food_item))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Day {} ({}) [{}] {} - {}",
        plan.day,
        plan.date.bright_black(),
        plan.nutrition_goal.label(),
        status.status.label(),
        meals,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::meal::{MealSlot, NutritionGoal};
    use crate::core::workout::{Intensity, WorkoutCategory};

    #[test]
    fn test_clip_flattens_and_bounds() {
        assert_eq!(clip("felt  great\ntoday", 40), "felt great today");
        assert_eq!(clip("abcdef", 4), "abcd...");
    }

    #[test]
    fn test_workout_line_includes_notes_preview() {
        let mut workout = Workout::new(
            "running",
            WorkoutCategory::Cardio,
            30,
            Intensity::Medium,
            Some("June 05, 2026".to_string()),
            None,
            None,
        );
        let line = workout_line(&workout);
        assert!(line.contains("[cardio]"));
        assert!(line.contains("30min"));
        assert!(line.contains("(360 cal)"));
        assert!(!line.contains(" - "));

        workout.set_notes("long  tempo session\nalong the river with negative splits");
        let line = workout_line(&workout);
        assert!(line.contains("long tempo session along the river"));
        assert!(line.ends_with("..."));
    }

    #[test]
    fn test_meal_plan_line_lists_slots_in_day_order() {
        let mut plan = MealPlan::new(
            2,
            Some("June 05, 2026".to_string()),
            NutritionGoal::MuscleGain,
            None,
            "",
        );
        assert!(meal_plan_line(&plan).contains("no meals planned"));

        plan.set_meal(MealSlot::Dinner, "salmon");
        plan.set_meal(MealSlot::Breakfast, "eggs");
        let line = meal_plan_line(&plan);
        assert!(line.contains("Day 2"));
        assert!(line.contains("[muscle_gain]"));
        assert!(line.contains("under_target"));
        assert!(line.contains("breakfast: Eggs, dinner: Salmon"));
    }
}
