use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::errors::CredentialError;

/// Where the authentication token lives between runs.
pub trait CredentialStore: Send + Sync {
    /// Current token, read fresh on every call.
    fn load_token(&self) -> Result<Option<String>, CredentialError>;

    fn save_token(&self, token: &str) -> Result<(), CredentialError>;

    /// Forget the token. Clearing an absent token is not an error.
    fn clear_token(&self) -> Result<(), CredentialError>;
}

/// Token stored as a JSON string in a single file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load_token(&self) -> Result<Option<String>, CredentialError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CredentialError::IoError { source: e }),
        };

        let token: Option<String> =
            serde_json::from_str(&content).map_err(|e| CredentialError::Corrupted {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(token)
    }

    fn save_token(&self, token: &str) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CredentialError::SaveFailed {
                message: format!("Failed to create directory ({}): {}", parent.display(), e),
            })?;
        }

        let json = serde_json::to_string(token).map_err(|e| CredentialError::SaveFailed {
            message: format!("Failed to serialize token: {}", e),
        })?;

        std::fs::write(&self.path, json).map_err(|e| CredentialError::SaveFailed {
            message: format!("Failed to write token file ({}): {}", self.path.display(), e),
        })?;

        tracing::info!(event = "core.credentials.saved", path = %self.path.display());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), CredentialError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(event = "core.credentials.cleared", path = %self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialError::IoError { source: e }),
        }
    }
}

/// In-process token holder.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: Mutex::new(token.map(str::to_string)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load_token(&self) -> Result<Option<String>, CredentialError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save_token(&self, token: &str) -> Result<(), CredentialError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), CredentialError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
