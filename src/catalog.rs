//! Remote exercise/nutrition catalog client.
//!
//! Talks to the wger Workout Manager API with a blocking client. Rate-limit
//! responses get one delayed retry; every other failure surfaces as
//! `RemoteFetchError` and callers are expected to fall back to the static
//! datasets below, which are schema-compatible with live responses.

use crate::core::error::FitnessError;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::thread;
use std::time::Duration;

const BASE_URL: &str = "https://wger.de/api/v2";
const USER_AGENT: &str = "FitTrack/2.0 (personal fitness tracker)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Courtesy delay before each request; not correctness-critical.
const REQUEST_DELAY: Duration = Duration::from_secs(1);
const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(5);
const MAX_DESCRIPTION_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCategory {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exercise {
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub equipment: Vec<String>,
    pub difficulty: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: String,
    pub calories_per_100g: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Result<Self, FitnessError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
        })
    }

    fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<JsonValue, FitnessError> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        thread::sleep(REQUEST_DELAY);

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("Accept", "application/json")
            .send()?;

        let response = if response.status() == StatusCode::TOO_MANY_REQUESTS {
            // Rate limited: one delayed retry, then give up.
            thread::sleep(RATE_LIMIT_BACKOFF);
            self.http
                .get(&url)
                .query(params)
                .header("Accept", "application/json")
                .send()?
        } else {
            response
        };

        if response.status() != StatusCode::OK {
            return Err(FitnessError::RemoteFetchError(format!(
                "request to {} failed: {}",
                endpoint,
                response.status()
            )));
        }
        Ok(response.json()?)
    }

    /// Fetch the available exercise categories.
    pub fn exercise_categories(&self) -> Result<Vec<ExerciseCategory>, FitnessError> {
        let data = self.get_json("exercisecategory/", &[])?;
        match data.get("results") {
            Some(results) => Ok(serde_json::from_value(results.clone())?),
            None => Ok(Vec::new()),
        }
    }

    /// Fetch up to `limit` exercises for a category, with per-exercise
    /// detail lookups for names, descriptions, and equipment.
    pub fn exercises_by_category(
        &self,
        category_id: u32,
        limit: u32,
    ) -> Result<Vec<Exercise>, FitnessError> {
        let params = [
            ("category", category_id.to_string()),
            ("limit", limit.to_string()),
            ("language", "2".to_string()),
        ];
        let data = self.get_json("exercise/", &params)?;
        let mut exercises = Vec::new();
        if let Some(results) = data.get("results").and_then(JsonValue::as_array) {
            for result in results {
                let Some(id) = result.get("id").and_then(JsonValue::as_u64) else {
                    continue;
                };
                let detail = self.get_json(&format!("exerciseinfo/{}/", id), &[])?;
                exercises.push(clean_exercise(&detail));
            }
        }
        Ok(exercises)
    }

    /// Look up nutrition facts for a food query, returning at most `limit`
    /// items. Served from the built-in table; no live nutrition endpoint is
    /// wired up.
    pub fn food_data(&self, query: &str, limit: usize) -> Vec<FoodItem> {
        let mut items = static_food_data(query);
        items.truncate(limit);
        items
    }
}

/// Extract a displayable exercise from a raw `exerciseinfo` response.
fn clean_exercise(raw: &JsonValue) -> Exercise {
    let mut name = "Unknown Exercise".to_string();
    let mut description = "No description available".to_string();

    if let Some(translation) = raw
        .get("translations")
        .and_then(JsonValue::as_array)
        .and_then(|translations| translations.first())
    {
        if let Some(translated) = translation.get("name").and_then(JsonValue::as_str) {
            name = translated.to_string();
        }
        if let Some(translated) = translation.get("description").and_then(JsonValue::as_str) {
            description = translated
                .replace("<p>", "")
                .replace("</p>", "")
                .replace("<br>", " ");
        }
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        description = format!(
            "{}...",
            description.chars().take(MAX_DESCRIPTION_CHARS).collect::<String>()
        );
    }

    let category = raw
        .get("category")
        .and_then(|category| category.get("name"))
        .and_then(JsonValue::as_str)
        .unwrap_or("Unknown")
        .to_string();

    let equipment = raw
        .get("equipment")
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("name").and_then(JsonValue::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Exercise {
        id: raw.get("id").and_then(JsonValue::as_u64),
        name,
        description,
        category,
        equipment,
        // The API does not expose difficulty.
        difficulty: "Medium".to_string(),
    }
}

/// Static category list used when the catalog is unreachable.
pub fn fallback_categories() -> Vec<ExerciseCategory> {
    [
        (1, "Abs"),
        (2, "Arms"),
        (3, "Back"),
        (4, "Calves"),
        (5, "Chest"),
        (6, "Legs"),
        (7, "Shoulders"),
        (8, "Cardio"),
    ]
    .into_iter()
    .map(|(id, name)| ExerciseCategory {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Static bodyweight exercises used when detail fetches fail.
pub fn fallback_exercises() -> Vec<Exercise> {
    [
        ("Push Ups", "Classic bodyweight chest and triceps exercise", "Chest"),
        ("Squats", "Fundamental lower-body strength movement", "Legs"),
        ("Plank", "Isometric core hold", "Abs"),
        ("Jumping Jacks", "Full-body cardio warm-up", "Cardio"),
    ]
    .into_iter()
    .map(|(name, description, category)| Exercise {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        equipment: Vec::new(),
        difficulty: "Medium".to_string(),
    })
    .collect()
}

fn static_food_data(query: &str) -> Vec<FoodItem> {
    let table: [(&str, FoodItem); 6] = [
        ("apple", food("Apple", 52, 0.3, 14.0, 0.2)),
        ("chicken", food("Chicken Breast", 165, 31.0, 0.0, 3.6)),
        ("rice", food("White Rice", 130, 2.7, 28.0, 0.3)),
        ("banana", food("Banana", 89, 1.1, 23.0, 0.3)),
        ("potatoes", food("Potatoes", 77, 2.0, 17.0, 0.1)),
        ("salmon", food("Salmon", 208, 22.0, 0.0, 12.0)),
    ];

    let needle = query.to_lowercase();
    for (key, item) in &table {
        if needle.contains(key) {
            return vec![item.clone()];
        }
    }
    vec![food(&crate::core::validate::title_case(query), 100, 5.0, 15.0, 2.0)]
}

fn food(name: &str, calories_per_100g: u32, protein: f64, carbs: f64, fat: f64) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        calories_per_100g,
        protein,
        carbs,
        fat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_exercise_extracts_translation() {
        let raw = json!({
            "id": 42,
            "translations": [{"name": "Bench Press", "description": "<p>Lie down.</p><br>Press up."}],
            "category": {"name": "Chest"},
            "equipment": [{"name": "Barbell"}, {"name": "Bench"}]
        });
        let exercise = clean_exercise(&raw);
        assert_eq!(exercise.id, Some(42));
        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.description, "Lie down. Press up.");
        assert_eq!(exercise.category, "Chest");
        assert_eq!(exercise.equipment, vec!["Barbell", "Bench"]);
        assert_eq!(exercise.difficulty, "Medium");
    }

    #[test]
    fn test_clean_exercise_defaults_and_truncation() {
        let exercise = clean_exercise(&json!({}));
        assert_eq!(exercise.name, "Unknown Exercise");
        assert_eq!(exercise.category, "Unknown");
        assert!(exercise.equipment.is_empty());

        let long = "x".repeat(300);
        let raw = json!({"translations": [{"name": "Row", "description": long}]});
        let truncated = clean_exercise(&raw);
        assert_eq!(truncated.description.chars().count(), 203);
        assert!(truncated.description.ends_with("..."));
    }

    #[test]
    fn test_fallback_categories_are_unique() {
        let categories = fallback_categories();
        assert_eq!(categories.len(), 8);
        let mut ids: Vec<u32> = categories.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids, (1..=8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_food_lookup_matches_substring() {
        let hits = static_food_data("grilled chicken");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chicken Breast");
        assert_eq!(hits[0].calories_per_100g, 165);
    }

    #[test]
    fn test_food_data_respects_limit() {
        let client = CatalogClient::new().unwrap();
        assert_eq!(client.food_data("grilled chicken", 5).len(), 1);
        assert!(client.food_data("grilled chicken", 0).is_empty());
    }

    #[test]
    fn test_food_lookup_generic_fallback() {
        let hits = static_food_data("dragonfruit");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dragonfruit");
        assert_eq!(hits[0].calories_per_100g, 100);
    }
}
