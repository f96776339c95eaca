use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::auth::{
    AuthProvider, CredentialRecord, RegisterOutcome, hash_password, validate_credentials,
};
use crate::error::Result;

/// Credentials kept in a flat CSV file with a `username,password` header.
#[derive(Debug, Clone)]
pub struct CsvCredentialStore {
    path: PathBuf,
}

impl CsvCredentialStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// All stored credentials; empty when the file does not exist yet.
    pub fn load(&self) -> Result<Vec<CredentialRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for record in rdr.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    fn find(&self, username: &str) -> Result<Option<CredentialRecord>> {
        Ok(self.load()?.into_iter().find(|r| r.username == username))
    }

    fn append(&self, record: &CredentialRecord) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Header goes in only when nothing has been written yet
        let needs_header = file.metadata()?.len() == 0;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        wtr.serialize(record)?;
        wtr.flush()?;
        Ok(())
    }
}

impl AuthProvider for CsvCredentialStore {
    fn register(&mut self, username: &str, password: &str) -> Result<RegisterOutcome> {
        validate_credentials(username, password)?;

        if self.find(username)?.is_some() {
            debug!(username, "registration refused, user exists");
            return Ok(RegisterOutcome::AlreadyExists);
        }

        self.append(&CredentialRecord {
            username: username.to_string(),
            password_hash: hash_password(password),
        })?;
        info!(username, path = %self.path.display(), "registered user");
        Ok(RegisterOutcome::Registered)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let hash = hash_password(password);
        let ok = self
            .find(username)?
            .is_some_and(|r| r.password_hash == hash);
        debug!(username, ok, "login attempt");
        Ok(ok)
    }
}
