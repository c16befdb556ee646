//! Credential and store management.
//!
//! `UserStore` owns the single on-disk JSON store and all credential
//! operations. Every mutation is a full read of the store, an in-memory
//! edit, and a full write. There is no locking: concurrent writers can lose
//! updates (last writer wins). The store is built for single-process,
//! single-user local use and keeps those best-effort semantics on purpose.
//!
//! Passwords are stored as unsalted SHA-256 hex digests. Same password,
//! same digest; verification is plain digest comparison. The digest is
//! never reversible and the plaintext is never persisted.

use crate::core::account::Account;
use crate::core::error::FitnessError;
use crate::core::meal::MealPlan;
use crate::core::time;
use crate::core::workout::Workout;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One persisted account record: the profile plus its credential digest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub password_hash: String,
    #[serde(flatten)]
    pub account: Account,
}

/// The full store: username -> record.
pub type StoreMap = BTreeMap<String, StoredRecord>;

/// An active login session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub username: String,
    pub started_at: String,
}

/// Success flag plus a human-readable message. Expected failures (duplicate
/// registration, bad password) come back through this rather than as errors.
pub type Outcome = (bool, String);

/// Typed profile mutations accepted by [`UserStore::update_field`].
#[derive(Copy, Clone, Debug)]
pub enum ProfileField {
    Weight(f64),
    TargetWeight(f64),
    WeeklyGoal(u32),
}

pub struct UserStore {
    path: PathBuf,
    session: Option<Session>,
}

impl UserStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// store file when absent. A session left behind by a previous run is
    /// restored from the sidecar file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FitnessError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).map_err(|e| {
                    FitnessError::StorageError(format!(
                        "cannot create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            fs::write(&path, "{}").map_err(|e| {
                FitnessError::StorageError(format!(
                    "cannot create store file {}: {}",
                    path.display(),
                    e
                ))
            })?;
        }
        let mut store = Self { path, session: None };
        store.restore_session();
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.username.as_str())
    }

    /// Unsalted SHA-256 hex digest of the password.
    pub fn hash_password(password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn load(&self) -> Result<StoreMap, FitnessError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, map: &StoreMap) -> Result<(), FitnessError> {
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    /// Create a new account and start a session for it. The profile comes in
    /// pre-built (empty histories, fresh timestamps); this layer adds the
    /// credential digest and rejects duplicate usernames by exact key match.
    pub fn register(&mut self, account: Account, password: &str) -> Outcome {
        match self.try_register(account, password) {
            Ok(message) => (true, message),
            Err(err) => (false, err.to_string()),
        }
    }

    fn try_register(&mut self, account: Account, password: &str) -> Result<String, FitnessError> {
        let mut map = self.load()?;
        if map.contains_key(&account.username) {
            return Err(FitnessError::DuplicateAccount(format!(
                "{}. Please choose a different username.",
                account.username
            )));
        }
        let username = account.username.clone();
        let name = account.name.clone();
        map.insert(
            username.clone(),
            StoredRecord {
                password_hash: Self::hash_password(password),
                account,
            },
        );
        self.save(&map)?;
        self.start_session(&username);
        Ok(format!("Account created successfully! Welcome to FitTrack, {}!", name))
    }

    /// Authenticate and start a session.
    pub fn login(&mut self, username: &str, password: &str) -> Outcome {
        match self.try_login(username, password) {
            Ok(message) => (true, message),
            Err(err) => (false, err.to_string()),
        }
    }

    fn try_login(&mut self, username: &str, password: &str) -> Result<String, FitnessError> {
        let map = self.load()?;
        let record = map
            .get(username)
            .ok_or_else(|| FitnessError::NotFound(username.to_string()))?;
        if Self::hash_password(password) != record.password_hash {
            return Err(FitnessError::InvalidCredential(username.to_string()));
        }
        self.start_session(username);
        Ok(format!("Welcome back, {}!", record.account.name))
    }

    /// End the active session. Fails when none is active.
    pub fn logout(&mut self) -> Outcome {
        if self.session.is_none() {
            return (false, "No active session to logout".to_string());
        }
        self.session = None;
        let _ = fs::remove_file(self.session_path());
        (true, "Successfully logged out. Goodbye!".to_string())
    }

    /// Fetch the record for `username`, or the session user when omitted.
    /// Soft-fails to `None` on read errors or absent users; read-mostly
    /// callers report "not found" and continue.
    pub fn record(&self, username: Option<&str>) -> Option<StoredRecord> {
        let map = self.load().ok()?;
        let key = username.or_else(|| self.current_user())?;
        map.get(key).cloned()
    }

    /// Append a workout to the user's history. The store is reloaded first,
    /// so a record deleted since the session started surfaces as `NotFound`.
    pub fn append_workout(&self, username: &str, workout: &Workout) -> Result<(), FitnessError> {
        let mut map = self.load()?;
        let record = map
            .get_mut(username)
            .ok_or_else(|| FitnessError::NotFound(username.to_string()))?;
        record.account.workouts.push(workout.clone());
        self.save(&map)
    }

    /// Append a meal plan to the user's history.
    pub fn append_meal_plan(&self, username: &str, plan: &MealPlan) -> Result<(), FitnessError> {
        let mut map = self.load()?;
        let record = map
            .get_mut(username)
            .ok_or_else(|| FitnessError::NotFound(username.to_string()))?;
        record.account.meals.push(plan.clone());
        self.save(&map)
    }

    /// Read-modify-write a single profile field.
    pub fn update_field(&self, username: &str, field: ProfileField) -> Result<(), FitnessError> {
        let mut map = self.load()?;
        let record = map
            .get_mut(username)
            .ok_or_else(|| FitnessError::NotFound(username.to_string()))?;
        match field {
            ProfileField::Weight(weight) => record.account.weight = weight,
            ProfileField::TargetWeight(target) => record.account.target_weight = target,
            ProfileField::WeeklyGoal(goal) => record.account.weekly_workout_goal = goal,
        }
        self.save(&map)
    }

    /// Best-effort last-login stamp for the session user. Failures are
    /// swallowed; this must never block the user.
    pub fn touch_last_login(&self) {
        let Some(username) = self.current_user().map(str::to_string) else {
            return;
        };
        let _ = self.try_touch(&username);
    }

    fn try_touch(&self, username: &str) -> Result<(), FitnessError> {
        let mut map = self.load()?;
        let record = map
            .get_mut(username)
            .ok_or_else(|| FitnessError::NotFound(username.to_string()))?;
        record.account.last_login = time::now_stamp();
        self.save(&map)
    }

    fn start_session(&mut self, username: &str) {
        let session = Session {
            username: username.to_string(),
            started_at: time::now_stamp(),
        };
        // Session persistence is a convenience; failures are ignored.
        let _ = fs::write(
            self.session_path(),
            format!("{}\n{}\n", session.username, session.started_at),
        );
        self.session = Some(session);
    }

    fn restore_session(&mut self) {
        let Ok(raw) = fs::read_to_string(self.session_path()) else {
            return;
        };
        let mut lines = raw.lines();
        let Some(username) = lines.next().map(str::trim).filter(|u| !u.is_empty()) else {
            return;
        };
        let started_at = lines.next().unwrap_or_default().trim().to_string();
        self.session = Some(Session {
            username: username.to_string(),
            started_at,
        });
    }

    fn session_path(&self) -> PathBuf {
        let mut raw = self.path.as_os_str().to_os_string();
        raw.push(".session");
        PathBuf::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic_hex() {
        let digest = UserStore::hash_password("hunter2");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, UserStore::hash_password("hunter2"));
    }

    #[test]
    fn test_distinct_passwords_distinct_digests() {
        assert_ne!(
            UserStore::hash_password("hunter2"),
            UserStore::hash_password("hunter3")
        );
    }

    #[test]
    fn test_digest_does_not_leak_plaintext() {
        assert!(!UserStore::hash_password("opensesame").contains("opensesame"));
    }
}
