use tracing::{info, warn};

use super::errors::AuthError;
use crate::api::SpacesApi;
use crate::credentials::CredentialStore;
use crate::state::SharedStore;

/// Outcome of an authentication check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// No token stored.
    Anonymous,
    /// The backend recognised the token.
    SignedIn { username: String },
    /// The backend rejected the token; it has been removed.
    TokenRevoked,
}

/// Work out who is signed in and publish it to the store.
///
/// - No stored token: not authenticated.
/// - Stored token: authenticated, then the backend is asked whose token it
///   is. A `null` username removes the token and clears the flag.
///
/// If the lookup fails the flag stays as derived from the token alone and
/// the error is returned.
pub async fn resolve_authentication(
    api: &dyn SpacesApi,
    credentials: &dyn CredentialStore,
    store: &SharedStore,
) -> Result<AuthStatus, AuthError> {
    let Some(token) = credentials.load_token()? else {
        store.set_authenticated(false);
        store.set_username(None);
        info!(event = "core.auth.resolve_completed", status = "anonymous");
        return Ok(AuthStatus::Anonymous);
    };

    store.set_authenticated(true);

    let username = match api.fetch_username(&token).await {
        Ok(username) => username,
        Err(e) => {
            warn!(
                event = "core.auth.username_fetch_failed",
                kind = e.kind(),
                error = %e
            );
            return Err(e.into());
        }
    };

    store.set_username(username.clone());

    match username {
        Some(username) => {
            info!(
                event = "core.auth.resolve_completed",
                status = "signed_in",
                username = %username
            );
            Ok(AuthStatus::SignedIn { username })
        }
        None => {
            credentials.clear_token()?;
            store.set_authenticated(false);
            info!(event = "core.auth.resolve_completed", status = "token_revoked");
            Ok(AuthStatus::TokenRevoked)
        }
    }
}

/// Record the sign-in email exactly as typed.
pub fn capture_signin_email(store: &SharedStore, value: &str) {
    store.set_signin_email(value);
}
