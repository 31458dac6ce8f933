use crate::errors::StudySpaceError;

/// Why a request to the backend failed.
///
/// The three cases look the same to the end user but stay distinct for
/// logging and for callers that branch on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("HTTP error! Status: {status}")]
    HttpStatus { status: u16 },

    #[error("Unexpected response format: {message}")]
    Shape { message: String },
}

impl FetchError {
    /// Short tag used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Shape { .. } => "shape",
        }
    }
}

impl StudySpaceError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "FETCH_TRANSPORT",
            FetchError::HttpStatus { .. } => "FETCH_HTTP_STATUS",
            FetchError::Shape { .. } => "FETCH_SHAPE",
        }
    }
}
