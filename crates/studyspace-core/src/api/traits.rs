use async_trait::async_trait;

use super::errors::FetchError;
use crate::spaces::Space;

/// Backend operations the client depends on.
///
/// [`super::HttpSpacesApi`] talks to the real service; tests substitute
/// scripted implementations.
#[async_trait]
pub trait SpacesApi: Send + Sync {
    /// Fetch the raw space listing.
    ///
    /// With a token the authenticated listing is used and the token is sent
    /// as a bearer credential; without one the anonymous listing is used.
    /// Records are returned exactly as received (expired ones included).
    async fn fetch_spaces(&self, token: Option<&str>) -> Result<Vec<Space>, FetchError>;

    /// Look up the username the token belongs to. `None` means the backend
    /// no longer recognises the token.
    async fn fetch_username(&self, token: &str) -> Result<Option<String>, FetchError>;
}
