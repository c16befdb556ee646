//! Shared timestamp helpers for store records.
//!
//! All persisted timestamps are human-readable local-time strings; the store
//! never needs to order or compare them.

use chrono::Local;

/// Returns the current date (e.g. `August 30, 2026`).
pub fn today() -> String {
    Local::now().format("%B %d, %Y").to_string()
}

/// Returns a full timestamp (e.g. `August 30, 2026 at 09:15 AM`).
pub fn now_stamp() -> String {
    Local::now().format("%B %d, %Y at %I:%M %p").to_string()
}

/// Returns the current time of day (e.g. `09:15 AM`).
pub fn clock_time() -> String {
    Local::now().format("%I:%M %p").to_string()
}
