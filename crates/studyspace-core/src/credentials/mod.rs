//! Persisted authentication token.
//!
//! The token is stored as a JSON-encoded string, so a file holding `null`
//! reads back as "no token", the same as a missing file.

pub mod errors;
pub mod store;

pub use errors::CredentialError;
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
