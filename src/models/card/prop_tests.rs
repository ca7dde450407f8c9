use super::*;
use crate::test_utils::{arb_card, arb_status};
use proptest::prelude::*;

// ============================================================================
// Status transitions
// ============================================================================

proptest! {
    /// Moving a card to its current status is a no-op
    #[test]
    fn prop_same_status_is_unchanged(card in arb_card()) {
        let mut moved = card.clone();
        let status = card.get_status().to_string();
        prop_assert!(!moved.transition_status(&status));
        prop_assert_eq!(moved, card);
    }

    /// Moving a card to a different status changes only the status
    #[test]
    fn prop_new_status_changes_only_status(card in arb_card(), status in arb_status()) {
        prop_assume!(status != card.get_status());
        let mut moved = card.clone();
        prop_assert!(moved.transition_status(&status));
        prop_assert_eq!(moved.get_status(), status.as_str());
        prop_assert_eq!(moved.get_id(), card.get_id());
        prop_assert_eq!(moved.get_title(), card.get_title());
        prop_assert_eq!(moved.get_description(), card.get_description());
        prop_assert_eq!(moved.get_created_at(), card.get_created_at());
    }

    /// The JSON representation round-trips through serde
    #[test]
    fn prop_card_json_roundtrip(card in arb_card()) {
        let json = serde_json::to_string(&card).unwrap();
        let parsed: Card = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, card);
    }
}

#[test]
fn test_card_json_field_names() {
    let created_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let card = Card::new_with_fields(7, "Title".to_string(), None, "new".to_string(), created_at);
    let value = serde_json::to_value(&card).unwrap();

    assert_eq!(value["id"], 7);
    assert_eq!(value["title"], "Title");
    assert!(value["description"].is_null());
    assert_eq!(value["status"], "new");
    assert!(value["created_at"].is_string());
}
