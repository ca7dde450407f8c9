use crate::db::DbPool;
use crate::models::{Card, NewCard};
use crate::schema::cards;
use anyhow::Result;
use diesel::prelude::*;
use tracing::{debug, info, instrument};

/// Lists all cards in the database, ordered by ID
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails
#[instrument(skip(pool))]
pub fn list_cards(pool: &DbPool) -> Result<Vec<Card>> {
    debug!("Listing all cards");

    let conn = &mut pool.get()?;

    let result = cards::table
        .order(cards::id.asc())
        .select(Card::as_select())
        .load(conn)?;

    debug!("Loaded {} cards", result.len());

    Ok(result)
}

/// Retrieves a card from the database by its ID
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `card_id` - The ID of the card to retrieve
///
/// ### Returns
///
/// A Result containing an Option with the Card if found, or None if not found
#[instrument(skip(pool), fields(card_id = %card_id))]
pub fn get_card(pool: &DbPool, card_id: i64) -> Result<Option<Card>> {
    debug!("Retrieving card by id");

    let conn = &mut pool.get()?;

    let result = cards::table
        .find(card_id)
        .select(Card::as_select())
        .first(conn)
        .optional()?;

    if result.is_none() {
        debug!("Card not found");
    }

    Ok(result)
}

/// Inserts a new card
///
/// ### Returns
///
/// The stored card, including the ID the database assigned to it
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
#[instrument(skip(pool, new_card), fields(status = %new_card.get_status()))]
pub fn create_card(pool: &DbPool, new_card: NewCard) -> Result<Card> {
    debug!("Inserting new card");

    let conn = &mut pool.get()?;

    let card = diesel::insert_into(cards::table)
        .values(&new_card)
        .returning(Card::as_returning())
        .get_result(conn)?;

    info!("Created card with id: {}", card.get_id());

    Ok(card)
}

/// Writes every mutable column of an existing card back to the database
///
/// ### Returns
///
/// The card as stored after the update, or `None` if the card no longer exists
///
/// ### Errors
///
/// Returns an error if the update fails
#[instrument(skip(pool, card), fields(card_id = %card.get_id(), status = %card.get_status()))]
pub fn save_card(pool: &DbPool, card: &Card) -> Result<Option<Card>> {
    debug!("Saving card");

    let conn = &mut pool.get()?;

    let saved = diesel::update(card)
        .set(card)
        .returning(Card::as_returning())
        .get_result(conn)
        .optional()?;

    match &saved {
        Some(_) => info!("Saved card with id: {}", card.get_id()),
        None => debug!("Card {} vanished before it was saved", card.get_id()),
    }

    Ok(saved)
}

/// Deletes a card by its ID
///
/// ### Returns
///
/// `true` if a card was deleted, `false` if no card had that ID
#[instrument(skip(pool), fields(card_id = %card_id))]
pub fn delete_card(pool: &DbPool, card_id: i64) -> Result<bool> {
    debug!("Deleting card");

    let conn = &mut pool.get()?;

    let deleted = diesel::delete(cards::table.find(card_id)).execute(conn)?;

    if deleted > 0 {
        info!("Deleted card with id: {}", card_id);
    } else {
        debug!("No card to delete");
    }

    Ok(deleted > 0)
}
