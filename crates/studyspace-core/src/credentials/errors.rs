use crate::errors::StudySpaceError;

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Stored token at '{path}' is corrupted: {message}")]
    Corrupted { path: String, message: String },

    #[error("Failed to save token: {message}")]
    SaveFailed { message: String },

    #[error("IO error accessing token: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl StudySpaceError for CredentialError {
    fn error_code(&self) -> &'static str {
        match self {
            CredentialError::Corrupted { .. } => "CREDENTIAL_CORRUPTED",
            CredentialError::SaveFailed { .. } => "CREDENTIAL_SAVE_FAILED",
            CredentialError::IoError { .. } => "CREDENTIAL_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, CredentialError::Corrupted { .. })
    }
}
