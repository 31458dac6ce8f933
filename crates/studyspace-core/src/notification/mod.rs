//! Notification banner visibility.
//!
//! A banner is requested through [`crate::state::SharedStore::show_message`].
//! The [`NotificationController`] shows it for a fixed window, then hides it
//! and clears the request flag so the same message can be shown again.

pub mod controller;
pub mod timer;
pub mod types;

pub use controller::{NotificationController, NotificationTask};
pub use timer::DelayedTask;
pub use types::{Banner, NotificationTone, VisibilityState};
