//! User registration and login, kept behind [`AuthProvider`] so that plan
//! generation never depends on how credentials are stored.

mod file_store;
mod memory;

pub use file_store::CsvCredentialStore;
pub use memory::InMemoryCredentialStore;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{DietError, Result};

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    AlreadyExists,
}

/// Stores usernames with password hashes and checks logins against them.
pub trait AuthProvider {
    /// Add a new user. Existing usernames are left untouched.
    fn register(&mut self, username: &str, password: &str) -> Result<RegisterOutcome>;

    /// Whether the username exists and the password matches.
    fn authenticate(&self, username: &str, password: &str) -> Result<bool>;
}

/// One stored credential: username and hex SHA-256 of the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

/// Hex-encoded SHA-256 digest of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Reject blank usernames or passwords before they reach a store.
pub fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(DietError::validation("username", "must not be empty"));
    }
    if password.is_empty() {
        return Err(DietError::validation("password", "must not be empty"));
    }
    Ok(())
}
