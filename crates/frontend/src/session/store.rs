//! Credential persistence.
//!
//! The browser kept one token string under a fixed `localStorage` key. The
//! headless client keeps the same contract behind [`CredentialStore`]: a
//! single opaque string, written at login, read on every page entry, removed
//! on logout or invalidation.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use nowapp_core::AccessToken;
use thiserror::Error;

/// Error reading or writing the stored credential.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("credential store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal lock was poisoned by a panicking writer.
    #[error("credential store lock poisoned")]
    Poisoned,
}

/// Storage for the single session credential.
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential, if any.
    ///
    /// # Errors
    ///
    /// Returns an error on storage failure; an absent credential is `Ok(None)`.
    fn load(&self) -> Result<Option<AccessToken>, StoreError>;

    /// Persist the credential, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error on storage failure.
    fn save(&self, token: &AccessToken) -> Result<(), StoreError>;

    /// Remove the stored credential. Removing an absent credential is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error on storage failure.
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed credential store.
///
/// One token string per file, nothing else. The file path plays the role of
/// the fixed storage key.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store persisting to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<AccessToken>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(AccessToken::new(trimmed)))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &AccessToken) -> Result<(), StoreError> {
        std::fs::write(&self.path, token.expose())?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory credential store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a credential.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<AccessToken>, StoreError> {
        let guard = self.token.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.as_deref().map(AccessToken::new))
    }

    fn save(&self, token: &AccessToken) -> Result<(), StoreError> {
        let mut guard = self.token.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(token.expose().to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.token.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}
