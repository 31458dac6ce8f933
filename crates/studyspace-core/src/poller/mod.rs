//! Space list refresher.
//!
//! [`refresh::refresh_once`] performs a single fetch-filter-replace pass;
//! [`PollSupervisor`] repeats it on a fixed cadence for as long as it is
//! alive, restarting whenever the authentication flag changes.

pub mod refresh;
pub mod supervisor;

pub use refresh::{RefreshOutcome, SPACES_ERROR_MESSAGE, refresh_once};
pub use supervisor::PollSupervisor;
