//! HTTP access to the StudySpace backend.

pub mod client;
pub mod errors;
pub mod traits;

pub use client::{HttpSpacesApi, decode_spaces_body, decode_username_body};
pub use errors::FetchError;
pub use traits::SpacesApi;
