use std::collections::HashMap;

use crate::auth::{AuthProvider, RegisterOutcome, hash_password, validate_credentials};
use crate::error::Result;

/// Credentials held only for the life of the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, String>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl AuthProvider for InMemoryCredentialStore {
    fn register(&mut self, username: &str, password: &str) -> Result<RegisterOutcome> {
        validate_credentials(username, password)?;

        if self.users.contains_key(username) {
            return Ok(RegisterOutcome::AlreadyExists);
        }
        self.users
            .insert(username.to_string(), hash_password(password));
        Ok(RegisterOutcome::Registered)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        Ok(self
            .users
            .get(username)
            .is_some_and(|hash| *hash == hash_password(password)))
    }
}
