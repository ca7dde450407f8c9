use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::DbPool;
use crate::dto::CardPayload;
use crate::errors::ApiError;
use crate::models::Card;
use crate::repo;

/// Resolves the card ID from the URL path
///
/// An ID that is not an integer cannot name a card, so it is reported the same
/// way as an ID with no card behind it.
fn card_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!("Unusable card id in path: {}", rejection.body_text());
            Err(ApiError::NotFound)
        }
    }
}

/// Unwraps a JSON body, turning any extraction failure into malformed input
fn card_payload(payload: Result<Json<CardPayload>, JsonRejection>) -> Result<CardPayload, ApiError> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| ApiError::MalformedInput(rejection.body_text()))
}

/// Handler for listing all cards
///
/// This function handles GET requests to `/cards`.
///
/// ### Returns
///
/// Every stored card, ordered by ID, as a JSON array
#[instrument(skip(pool))]
pub async fn list_cards_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<Card>>, ApiError> {
    debug!("Listing cards");

    let cards = repo::list_cards(&pool)
        .map_err(ApiError::Database)?;

    info!("Retrieved {} cards", cards.len());

    Ok(Json(cards))
}


/// Handler for retrieving a specific card
///
/// This function handles GET requests to `/cards/{id}`.
///
/// ### Returns
///
/// The requested card as JSON, or 404 with an empty body if there is no such card
#[instrument(skip(pool, path))]
pub async fn get_card_handler(
    State(pool): State<Arc<DbPool>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Card>, ApiError> {
    let id = card_id(path)?;
    debug!("Getting card {}", id);

    let card = repo::get_card(&pool, id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(card))
}


/// Handler for creating a card
///
/// This function handles POST requests to `/cards`. The ID is assigned by the
/// database; any ID in the body is ignored.
///
/// ### Returns
///
/// The created card as JSON, or 400 with an empty body if the body is not a
/// card
#[instrument(skip(pool, payload))]
pub async fn create_card_handler(
    State(pool): State<Arc<DbPool>>,
    // Extract the JSON body, keeping the rejection so it maps to a 400
    payload: Result<Json<CardPayload>, JsonRejection>,
) -> Result<Json<Card>, ApiError> {
    let payload = card_payload(payload)?;
    info!("Creating card with status {}", payload.status);

    let card = repo::create_card(&pool, payload.into_new_card())
        .map_err(ApiError::Database)?;

    info!("Successfully created card with id: {}", card.get_id());

    Ok(Json(card))
}


/// Handler for updating a card's status
///
/// This function handles PUT and PATCH requests to `/cards/{id}`. Only the
/// `status` field of the body is applied; the rest is ignored.
///
/// ### Returns
///
/// - 200 with the updated card if the status changed
/// - 204 with an empty body if the status was already the requested one
/// - 404 if there is no such card, 400 if the body is not a card
#[instrument(skip(pool, path, payload))]
pub async fn update_card_handler(
    State(pool): State<Arc<DbPool>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CardPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = card_id(path)?;
    debug!("Updating card {}", id);

    // The card must exist before the body is looked at
    let mut card = repo::get_card(&pool, id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let payload = card_payload(payload)?;

    if !card.transition_status(&payload.status) {
        debug!("Status unchanged, nothing to save");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    // Deleted between the lookup and the write
    let card = repo::save_card(&pool, &card)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    info!("Card {} moved to status {}", id, card.get_status());

    Ok(Json(card).into_response())
}


/// Handler for deleting a card
///
/// This function handles DELETE requests to `/cards/{id}`.
///
/// ### Returns
///
/// 200 with an empty body once the card is gone, or 404 if there was no such card
#[instrument(skip(pool, path))]
pub async fn delete_card_handler(
    State(pool): State<Arc<DbPool>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = card_id(path)?;
    debug!("Deleting card {}", id);

    let deleted = repo::delete_card(&pool, id)
        .map_err(ApiError::Database)?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    info!("Deleted card {}", id);

    Ok(StatusCode::OK)
}
