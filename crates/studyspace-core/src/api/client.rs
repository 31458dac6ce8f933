use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::debug;

use super::errors::FetchError;
use super::traits::SpacesApi;
use crate::config::ApiConfig;
use crate::spaces::Space;

/// [`SpacesApi`] over HTTP using a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpSpacesApi {
    client: reqwest::Client,
    spaces_url: String,
    public_spaces_url: String,
    username_url: String,
}

impl HttpSpacesApi {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| FetchError::Transport {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            spaces_url: config.spaces_url(),
            public_spaces_url: config.public_spaces_url(),
            username_url: config.username_url(),
        })
    }

    /// GET `url` with JSON headers and an optional bearer token, returning
    /// the body of a 2xx response.
    async fn get(&self, url: &str, token: Option<&str>) -> Result<Vec<u8>, FetchError> {
        let mut request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| FetchError::Transport {
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            message: format!("Failed to read response body: {}", e),
        })?;

        debug!(
            event = "core.api.response_received",
            url = url,
            status = status.as_u16(),
            bytes = body.len()
        );

        Ok(body.to_vec())
    }
}

#[async_trait]
impl SpacesApi for HttpSpacesApi {
    async fn fetch_spaces(&self, token: Option<&str>) -> Result<Vec<Space>, FetchError> {
        let url = match token {
            Some(_) => &self.spaces_url,
            None => &self.public_spaces_url,
        };
        let body = self.get(url, token).await?;
        decode_spaces_body(&body)
    }

    async fn fetch_username(&self, token: &str) -> Result<Option<String>, FetchError> {
        let body = self.get(&self.username_url, Some(token)).await?;
        decode_username_body(&body)
    }
}

/// Decode a `{ "spaces": [...] }` body.
///
/// A body that is not JSON, lacks `spaces`, holds a non-array `spaces` or
/// contains an undecodable record is a [`FetchError::Shape`].
pub fn decode_spaces_body(body: &[u8]) -> Result<Vec<Space>, FetchError> {
    let mut value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| FetchError::Shape {
            message: format!("body is not valid JSON: {}", e),
        })?;

    let spaces = match value.get_mut("spaces") {
        None => {
            return Err(FetchError::Shape {
                message: "missing 'spaces' field".to_string(),
            });
        }
        Some(spaces) if !spaces.is_array() => {
            return Err(FetchError::Shape {
                message: "'spaces' is not an array".to_string(),
            });
        }
        Some(spaces) => spaces.take(),
    };

    serde_json::from_value(spaces).map_err(|e| FetchError::Shape {
        message: format!("invalid space record: {}", e),
    })
}

#[derive(Deserialize)]
struct UsernameResponse {
    #[serde(default)]
    username: Option<String>,
}

/// Decode a `{ "username": <string|null> }` body.
pub fn decode_username_body(body: &[u8]) -> Result<Option<String>, FetchError> {
    let response: UsernameResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Shape {
            message: format!("invalid username response: {}", e),
        })?;
    Ok(response.username)
}
