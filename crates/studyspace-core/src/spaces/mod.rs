//! Study space records as served by the backend.

pub mod operations;
pub mod types;

pub use operations::{joined_count, prepare_spaces};
pub use types::Space;
