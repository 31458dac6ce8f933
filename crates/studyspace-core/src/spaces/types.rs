use serde::{Deserialize, Serialize};

/// A bookable study session with schedule, venue and membership.
///
/// Field names follow the backend's JSON casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Venue")]
    pub venue: String,
    /// ISO-8601 start of the session.
    #[serde(rename = "FromTime")]
    pub from_time: String,
    /// ISO-8601 end of the session.
    #[serde(rename = "ToTime")]
    pub to_time: String,
    #[serde(rename = "DateCreatedOn")]
    pub date_created_on: String,
    #[serde(rename = "Author")]
    pub author: String,
    /// Member user identifiers in join order.
    #[serde(rename = "Users", default)]
    pub users: Vec<String>,
    /// Whether the current viewer already joined.
    #[serde(rename = "Joined", default)]
    pub joined: bool,
    #[serde(rename = "isExpired", default)]
    pub is_expired: bool,
}

impl Space {
    pub fn member_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
pub(crate) fn test_space(id: &str) -> Space {
    Space {
        id: id.to_string(),
        title: format!("Space {}", id),
        description: "Group revision".to_string(),
        subject: "Maths".to_string(),
        venue: "Library".to_string(),
        from_time: "2024-05-01T10:00:00.000Z".to_string(),
        to_time: "2024-05-01T12:30:00.000Z".to_string(),
        date_created_on: "2024-05-01".to_string(),
        author: "o210001".to_string(),
        users: vec!["o210001".to_string()],
        joined: false,
        is_expired: false,
    }
}
