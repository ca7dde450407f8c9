/// Cardboard: a REST service for cards
///
/// This library provides the data model, database access, and HTTP API for a
/// small card tracker. Each card has an ID assigned by the database and a
/// status that moves as work progresses.
///
/// ### Modules
///
/// - `config`: Layered configuration (defaults, config file, environment, flags)
/// - `db`: Database connection management and migrations
/// - `dto`: Request bodies accepted by the API
/// - `errors`: The error type handlers return and its status codes
/// - `handlers`: Axum handlers for each endpoint
/// - `logging`: Tracing subscriber setup
/// - `models`: Data structures representing cards
/// - `repo`: Repository layer for database operations
/// - `schema`: Database schema definitions
///
/// ### Web API
///
/// - `GET /cards`: List all cards
/// - `POST /cards`: Create a card
/// - `GET /cards/{id}`: Get a specific card by ID
/// - `PUT /cards/{id}`, `PATCH /cards/{id}`: Change a card's status
/// - `DELETE /cards/{id}`: Delete a card

pub mod config;

/// Database connection module
pub mod db;

/// Data transfer objects
pub mod dto;

pub mod errors;

/// Request handlers
pub mod handlers;

pub mod logging;

/// Data models module
pub mod models;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

#[cfg(test)]
pub mod test_utils;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use db::run_migrations;
pub use errors::ApiError;

/// Creates the application router with all routes
///
/// ### Arguments
///
/// * `pool` - The database connection pool to be shared with all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes and the database pool as state
pub fn create_app(pool: Arc<db::DbPool>) -> Router {
    Router::new()
        // Route for listing and creating cards
        .route(
            "/cards",
            get(handlers::list_cards_handler).post(handlers::create_card_handler),
        )
        // Routes for a single card
        .route(
            "/cards/{id}",
            get(handlers::get_card_handler)
                .put(handlers::update_card_handler)
                .patch(handlers::update_card_handler)
                .delete(handlers::delete_card_handler),
        )
        // Add the database pool to the application state
        .with_state(pool)
}
