//! Shared client state.
//!
//! A single [`SharedStore`] is created at startup and handed to every
//! component that reads or writes client state. Each field has one owning
//! writer; see the table on [`SharedStore`].

pub mod store;
pub mod types;

pub use store::SharedStore;
pub use types::Notification;
