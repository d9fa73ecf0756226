//! Error types for parking-manager

use thiserror::Error;

/// Rejected field values for a new vehicle record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid ID {0}. Must be a positive integer")]
    InvalidId(i64),

    #[error("Invalid duration {0}. Must be a positive number of hours")]
    InvalidDuration(f64),

    #[error("Invalid charge {0}. Must be a non-negative amount")]
    InvalidCharge(f64),

    #[error("Plate number must not be empty")]
    EmptyPlate,
}

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Duplicate ID {0}. Must be unique")]
    DuplicateId(u32),

    #[error("List must be sorted by ID first")]
    NotSortedById,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;
