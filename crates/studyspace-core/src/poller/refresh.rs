use tracing::{error, info};

use crate::api::{FetchError, SpacesApi};
use crate::credentials::CredentialStore;
use crate::errors::StudySpaceError;
use crate::spaces::prepare_spaces;
use crate::state::SharedStore;

/// Message shown in place of the space grid after any failed refresh.
pub const SPACES_ERROR_MESSAGE: &str = "Error fetching spaces. Please try again later.";

/// Result of one refresh: number of spaces now stored, or why it failed.
pub type RefreshOutcome = Result<usize, FetchError>;

/// Fetch the space listing once and publish it into `store`.
///
/// The token is read from `credentials` at call time and picks the endpoint.
/// On success expired records are dropped, the rest are stored newest first
/// and any previous error is cleared. On failure the stored collection is
/// left as it was and the user-facing error is set.
pub async fn refresh_once(
    api: &dyn SpacesApi,
    credentials: &dyn CredentialStore,
    store: &SharedStore,
) -> RefreshOutcome {
    let token = match credentials.load_token() {
        Ok(token) => token,
        Err(e) => {
            error!(
                event = "core.poller.token_load_failed",
                error = %e,
                error_code = e.error_code(),
                "Falling back to the anonymous listing"
            );
            None
        }
    };
    let authenticated = token.is_some();

    info!(
        event = "core.poller.fetch_started",
        authenticated = authenticated
    );

    match api.fetch_spaces(token.as_deref()).await {
        Ok(fetched) => {
            let received = fetched.len();
            let spaces = prepare_spaces(fetched);
            let stored = spaces.len();

            store.replace_spaces(spaces);
            store.set_spaces_error(None);

            info!(
                event = "core.poller.fetch_completed",
                authenticated = authenticated,
                received = received,
                stored = stored,
                expired = received - stored
            );
            Ok(stored)
        }
        Err(e) => {
            error!(
                event = "core.poller.fetch_failed",
                authenticated = authenticated,
                kind = e.kind(),
                error_code = e.error_code(),
                error = %e
            );
            store.set_spaces_error(Some(SPACES_ERROR_MESSAGE.to_string()));
            Err(e)
        }
    }
}
