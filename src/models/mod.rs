/// Data models module
///
/// This module defines the data structures that map to database tables.

mod card;
pub use card::{Card, NewCard};
