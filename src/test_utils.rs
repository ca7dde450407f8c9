use crate::*;
use chrono::{DateTime, Utc};
use proptest::prelude::*;
use std::sync::Arc;

/// Sets up a test database with migrations applied
///
/// ### Returns
///
/// An Arc-wrapped database connection pool connected to a fresh in-memory database
pub fn setup_test_db() -> Arc<db::DbPool> {
    // Plain ":memory:" gives each pooled connection its own database, so use a
    // unique shared-cache URI to make every connection in this pool see the
    // same schema while staying isolated from other tests.
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url).expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");
    db::run_migrations(&mut conn).expect("Failed to run migrations");

    Arc::new(pool)
}

/// Sets up an in-memory database where no migrations have been run
///
/// Every query against the `cards` table fails, which is how tests provoke
/// persistence failures.
pub fn setup_broken_db() -> Arc<db::DbPool> {
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:broken_{}?mode=memory&cache=shared", unique_id);
    Arc::new(db::init_pool(&database_url).expect("Failed to create pool"))
}

/// Generates an arbitrary DateTime<Utc> within 2020-01-01 to 2030-01-01
pub fn arb_datetime_utc() -> impl Strategy<Value = DateTime<Utc>> {
    (1_577_836_800i64..1_893_456_000i64)
        .prop_map(|ts| DateTime::from_timestamp(ts, 0).unwrap())
}

/// Generates a status string from a small vocabulary plus arbitrary words
pub fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("new".to_string()),
        Just("doing".to_string()),
        Just("done".to_string()),
        "[a-z_]{1,12}",
    ]
}

/// Generates an arbitrary stored card
pub fn arb_card() -> impl Strategy<Value = models::Card> {
    (
        1i64..1_000_000,
        "[a-zA-Z0-9 .,-]{0,40}",
        prop::option::of("[a-zA-Z0-9 .,-]{0,80}"),
        arb_status(),
        arb_datetime_utc(),
    )
        .prop_map(|(id, title, description, status, created_at)| {
            models::Card::new_with_fields(id, title, description, status, created_at)
        })
}
