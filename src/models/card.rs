use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a card stored in the `cards` table
#[derive(Queryable, Selectable, Identifiable, AsChangeset, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Card {
    /// Unique identifier for the card, assigned by the database on insert
    id: i64,

    /// Short title of the card
    title: String,

    /// Optional longer description
    description: Option<String>,

    /// Workflow status of the card (e.g. "new", "doing", "done")
    status: String,

    /// When this card was created
    created_at: NaiveDateTime,
}

/// A card that has not been stored yet, and so has no ID
#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::cards)]
pub struct NewCard {
    title: String,
    description: Option<String>,
    status: String,
    created_at: NaiveDateTime,
}

impl NewCard {
    /// Creates a new, unsaved card stamped with the current time
    ///
    /// ### Arguments
    ///
    /// * `title` - The title of the card
    /// * `description` - An optional description
    /// * `status` - The initial status of the card
    pub fn new(title: String, description: Option<String>, status: String) -> Self {
        Self {
            title,
            description,
            status,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_status(&self) -> &str {
        &self.status
    }
}

impl Card {
    /// Creates a card with all fields specified
    ///
    /// Mostly useful for reconstructing cards outside the database layer.
    pub fn new_with_fields(
        id: i64,
        title: String,
        description: Option<String>,
        status: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
            created_at: created_at.naive_utc(),
        }
    }

    /// Gets the card's ID
    pub fn get_id(&self) -> i64 {
        self.id
    }

    /// Gets the card's title
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Gets the card's description, if any
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Gets the card's status
    pub fn get_status(&self) -> &str {
        &self.status
    }

    /// Sets the card's status
    ///
    /// ### Arguments
    ///
    /// * `status` - The new status for the card
    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    /// Gets the card's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }

    /// Moves the card to `status` if it differs from the current one
    ///
    /// ### Returns
    ///
    /// `true` if the status changed and the card needs saving, `false` otherwise
    pub fn transition_status(&mut self, status: &str) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status.to_string();
        true
    }
}

#[cfg(test)]
mod prop_tests;
