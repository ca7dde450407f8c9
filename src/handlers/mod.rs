/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler extracts the request data, calls the repository, and maps
/// the outcome to a status code and body.

mod card_handlers;

pub use card_handlers::*;
