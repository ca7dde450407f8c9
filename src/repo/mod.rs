/// Repository module
///
/// This module provides the data access layer for the application: the
/// functions that read and write cards through a connection pool.

mod card_repo;

pub use card_repo::*;
