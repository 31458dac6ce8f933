//! Signed-in user resolution and sign-in input capture.

pub mod errors;
pub mod handler;

pub use errors::AuthError;
pub use handler::{AuthStatus, capture_signin_email, resolve_authentication};
