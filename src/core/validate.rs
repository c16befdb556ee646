//! Field validators for user-supplied text.
//!
//! Pure functions that validate and normalize free-form input into typed
//! fields. Each doubles as a clap `value_parser`, so malformed arguments are
//! rejected before any command logic runs.

use crate::core::error::FitnessError;
use regex::Regex;
use std::sync::OnceLock;

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]+( [A-Za-z]+)*$").expect("static pattern"))
}

/// Lowercase with spaces collapsed to underscores. Shared key normalization
/// for workout-type and food-item lookups.
pub fn snake_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Title-case each whitespace-separated word.
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate and normalize a username: trimmed, lowercased, 3-20 ASCII
/// alphanumeric characters.
pub fn username(raw: &str) -> Result<String, FitnessError> {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.chars().count() < 3 {
        Err(FitnessError::ValidationError(
            "Username too short (minimum 3 characters)".to_string(),
        ))
    } else if cleaned.chars().count() > 20 {
        Err(FitnessError::ValidationError(
            "Username too long (maximum 20 characters)".to_string(),
        ))
    } else if !cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
        Err(FitnessError::ValidationError(
            "Username can only contain letters and numbers".to_string(),
        ))
    } else {
        Ok(cleaned)
    }
}

/// Validate and normalize a display name: trimmed, title-cased, 2-50 chars,
/// letters and single spaces only.
pub fn display_name(raw: &str) -> Result<String, FitnessError> {
    let cleaned = title_case(raw);
    if cleaned.chars().count() < 2 {
        Err(FitnessError::ValidationError(
            "Name too short (minimum 2 characters)".to_string(),
        ))
    } else if cleaned.chars().count() > 50 {
        Err(FitnessError::ValidationError(
            "Name too long (maximum 50 characters)".to_string(),
        ))
    } else if !name_pattern().is_match(&cleaned) {
        Err(FitnessError::ValidationError(
            "Name can only contain letters and spaces".to_string(),
        ))
    } else {
        Ok(cleaned)
    }
}

/// Validate an age: 13-100 inclusive.
pub fn age(raw: &str) -> Result<u32, FitnessError> {
    let parsed: u32 = raw
        .trim()
        .parse()
        .map_err(|_| FitnessError::ValidationError("Age must be a valid number".to_string()))?;
    if parsed < 13 {
        Err(FitnessError::ValidationError(
            "Age too young (minimum 13 years)".to_string(),
        ))
    } else if parsed > 100 {
        Err(FitnessError::ValidationError(
            "Age too high (maximum 100 years)".to_string(),
        ))
    } else {
        Ok(parsed)
    }
}

/// Validate a weight in kilograms: greater than 2, at most 1000.
pub fn weight_kg(raw: &str) -> Result<f64, FitnessError> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FitnessError::ValidationError("Weight must be a valid number".to_string()))?;
    if parsed <= 2.0 {
        Err(FitnessError::ValidationError(
            "Weight must be greater than 2kg".to_string(),
        ))
    } else if parsed > 1000.0 {
        Err(FitnessError::ValidationError(
            "Weight too high (maximum 1000kg)".to_string(),
        ))
    } else {
        Ok(parsed)
    }
}

/// Validate a weekly workout goal: 1-14 sessions.
pub fn weekly_goal(raw: &str) -> Result<u32, FitnessError> {
    let parsed: u32 = raw.trim().parse().map_err(|_| {
        FitnessError::ValidationError("Weekly goal must be a valid number".to_string())
    })?;
    if !(1..=14).contains(&parsed) {
        Err(FitnessError::ValidationError(
            "Weekly goal must be between 1 and 14 workouts".to_string(),
        ))
    } else {
        Ok(parsed)
    }
}

/// Validate a workout duration in minutes: must be positive.
pub fn duration_minutes(raw: &str) -> Result<u32, FitnessError> {
    let parsed: u32 = raw.trim().parse().map_err(|_| {
        FitnessError::ValidationError("Duration must be a valid number".to_string())
    })?;
    if parsed == 0 {
        Err(FitnessError::ValidationError(
            "Duration must be at least 1 minute".to_string(),
        ))
    } else {
        Ok(parsed)
    }
}

/// Validate a numeric choice within an inclusive range.
pub fn choice_in_range(raw: &str, min: u32, max: u32) -> Result<u32, FitnessError> {
    let parsed: u32 = raw
        .trim()
        .parse()
        .map_err(|_| FitnessError::ValidationError("Please enter a valid number".to_string()))?;
    if parsed < min || parsed > max {
        Err(FitnessError::ValidationError(format!(
            "Please choose a number between {}-{}",
            min, max
        )))
    } else {
        Ok(parsed)
    }
}

/// Parse a yes/no answer.
pub fn yes_no(raw: &str) -> Result<bool, FitnessError> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(FitnessError::ValidationError(
            "Please respond with yes (y) or no (n)".to_string(),
        )),
    }
}
