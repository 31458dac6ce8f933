use crate::api::FetchError;
use crate::credentials::CredentialError;
use crate::errors::StudySpaceError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl StudySpaceError for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            AuthError::Credentials(e) => e.error_code(),
            AuthError::Fetch(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            AuthError::Credentials(e) => e.is_user_error(),
            AuthError::Fetch(e) => e.is_user_error(),
        }
    }
}
