use serde::{Deserialize, Serialize};

use crate::models::NewCard;

/// Card-shaped request body accepted by the create and update endpoints
///
/// Only `status` is required. `id` and `created_at` are owned by the database,
/// so they are ignored if a client sends them back, as are any unknown fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardPayload {
    /// The title of the card
    #[serde(default)]
    pub title: String,

    /// An optional description of the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The status of the card
    pub status: String,
}

impl CardPayload {
    /// Builds a payload carrying only a status
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            description: None,
            status: status.into(),
        }
    }

    /// Converts the payload into a card ready to be inserted
    pub fn into_new_card(self) -> NewCard {
        NewCard::new(self.title, self.description, self.status)
    }
}
