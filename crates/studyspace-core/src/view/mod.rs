//! What the home view shows for the current collection.
//!
//! Pure functions over a snapshot of the store; nothing here writes state.

pub mod routing;
pub mod types;

pub use routing::{route_home, time_label};
pub use types::{HomeView, LandingPage, SpaceCard};
