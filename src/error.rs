use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication failed for user '{0}'")]
    AuthenticationFailed(String),

    #[error("No meals defined for {0}")]
    EmptySlot(MealSlot),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DietError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        DietError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DietError>;
