//! studyspace-core: Core library for the StudySpace client
//!
//! Keeps a local picture of the study spaces offered by the backend and
//! drives the transient notification banner. Used by the CLI and by any
//! other front end that embeds it.
//!
//! # Main Entry Points
//!
//! - [`poller`] - Fetch spaces once or keep them refreshed on a schedule
//! - [`notification`] - Timed show/hide of the notification banner
//! - [`state`] - Shared store read by every view
//! - [`auth`] - Resolve the signed-in user from the stored token
//! - [`view`] - Decide what the home view shows for the current collection
//! - [`config`] - Configuration management

pub mod api;
pub mod auth;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod logging;
pub mod notification;
pub mod poller;
pub mod spaces;
pub mod state;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types at crate root for convenience
pub use api::{FetchError, HttpSpacesApi, SpacesApi};
pub use config::{Config, StudySpaceConfig};
pub use credentials::{CredentialError, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use notification::{NotificationController, NotificationTone};
pub use poller::{PollSupervisor, SPACES_ERROR_MESSAGE};
pub use spaces::Space;
pub use state::{Notification, SharedStore};
pub use view::{HomeView, SpaceCard};

// Re-export handler modules as the primary API
pub use auth::handler as auth_ops;
pub use poller::refresh as refresh_ops;

// Re-export logging initialization
pub use logging::init_logging;
