use chrono::DateTime;

use super::types::{HomeView, LandingPage, SpaceCard};
use crate::spaces::{Space, joined_count};
use crate::state::SharedStore;

/// Decide what the home view shows.
///
/// The landing page wins whenever the joined count reaches the collection
/// size, which includes the empty collection; only then are the error and
/// the grid considered.
pub fn route_home(
    spaces: &[Space],
    error: Option<&str>,
    has_token: bool,
    authenticated: bool,
) -> HomeView {
    if joined_count(spaces) >= spaces.len() {
        return HomeView::Landing(LandingPage {
            show_top_bar: has_token,
            authenticated,
        });
    }

    if let Some(message) = error {
        return HomeView::Error {
            message: message.to_string(),
        };
    }

    HomeView::Grid {
        cards: spaces.iter().map(SpaceCard::from).collect(),
    }
}

impl HomeView {
    /// Route from the current store snapshot.
    pub fn from_store(store: &SharedStore, has_token: bool) -> Self {
        let spaces = store.spaces();
        let error = store.spaces_error();
        route_home(
            &spaces,
            error.as_deref(),
            has_token,
            store.is_authenticated(),
        )
    }
}

/// Time-of-day part of an ISO-8601 timestamp, as `HH:MM:SS`.
///
/// The time is taken as written (no zone conversion). Strings that do not
/// parse fall back to the text between `T` and the fractional seconds.
pub fn time_label(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.format("%H:%M:%S").to_string();
    }

    let time = timestamp
        .split_once('T')
        .map_or(timestamp, |(_, time)| time);
    time.split('.').next().unwrap_or(time).to_string()
}
