use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitnessError {
    #[error("Username not found: {0}")]
    NotFound(String),
    #[error("Invalid password for user: {0}")]
    InvalidCredential(String),
    #[error("Username already exists: {0}")]
    DuplicateAccount(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Store serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Remote fetch error: {0}")]
    RemoteFetchError(String),
}

impl From<reqwest::Error> for FitnessError {
    fn from(err: reqwest::Error) -> Self {
        FitnessError::RemoteFetchError(err.to_string())
    }
}
