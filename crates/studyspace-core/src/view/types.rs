use serde::Serialize;

use crate::spaces::Space;

/// Home view decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum HomeView {
    /// Nothing new to join: every listed space is already joined, or the
    /// list is empty.
    Landing(LandingPage),
    /// The last refresh failed.
    Error { message: String },
    Grid { cards: Vec<SpaceCard> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LandingPage {
    /// A stored token exists, so the signed-in top bar is shown.
    pub show_top_bar: bool,
    pub authenticated: bool,
}

impl LandingPage {
    pub fn message(&self) -> &'static str {
        if self.authenticated {
            "It looks like there are no new spaces available. Check your joined spaces or create a new one!"
        } else {
            "No spaces are available right now. Sign up to join or create a study space!"
        }
    }

    /// Anonymous visitors get a call to action to create a space.
    pub fn offers_create_space(&self) -> bool {
        !self.authenticated
    }
}

/// Display summary of one space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceCard {
    pub id: String,
    pub heading: String,
    pub description: String,
    pub subject: String,
    pub venue: String,
    pub author: String,
    pub date: String,
    /// `"HH:MM:SS to HH:MM:SS"`
    pub time: String,
    pub joined: bool,
    pub member_count: usize,
}

impl From<&Space> for SpaceCard {
    fn from(space: &Space) -> Self {
        Self {
            id: space.id.clone(),
            heading: space.title.clone(),
            description: space.description.clone(),
            subject: space.subject.clone(),
            venue: space.venue.clone(),
            author: space.author.clone(),
            date: space.date_created_on.clone(),
            time: format!(
                "{} to {}",
                super::routing::time_label(&space.from_time),
                super::routing::time_label(&space.to_time)
            ),
            joined: space.joined,
            member_count: space.member_count(),
        }
    }
}
