//! Property tests for last-writer-wins and typing normalization.

use proptest::prelude::*;
use room_state::{ChangeLog, StateTable, TYPING};
use serde_json::json;

fn event_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("m.room.name".to_string()),
        Just("m.room.member".to_string()),
        Just("m.room.aliases".to_string()),
        "m\\.custom\\.[a-z]{1,6}",
    ]
}

fn state_key() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "@[a-z]{1,5}:[a-z]{1,4}"]
}

fn sender() -> impl Strategy<Value = String> {
    "@[a-z]{1,5}:[a-z]{1,4}"
}

proptest! {
    #[test]
    fn prop_last_update_wins(
        event_type in event_type(),
        state_key in state_key(),
        updates in prop::collection::vec((sender(), any::<u32>()), 1..20),
    ) {
        let mut table = StateTable::new();

        for (sender, n) in &updates {
            let outcome = table.apply(&json!({
                "type": event_type,
                "state_key": state_key,
                "sender": sender,
                "content": {"n": n},
            }));
            prop_assert!(outcome.is_applied());
        }

        let (last_sender, last_n) = updates.last().unwrap();
        let event = table.get_event(&event_type, &state_key).unwrap();
        prop_assert_eq!(event.sender(), last_sender.as_str());
        prop_assert_eq!(&event.content()["n"], &json!(last_n));
        prop_assert_eq!(table.len(), 1);
    }

    #[test]
    fn prop_observer_sees_previous_value(
        state_key in state_key(),
        values in prop::collection::vec(any::<u32>(), 2..10),
    ) {
        let mut table = StateTable::new();
        let mut log = ChangeLog::new();

        for n in &values {
            table.update(&json!({
                "type": "m.custom.counter",
                "state_key": state_key,
                "sender": "@a:x",
                "content": {"n": n},
            }), &mut log);
        }

        let changes = log.changes();
        prop_assert_eq!(changes.len(), values.len());
        prop_assert!(changes[0].old.is_none());
        for (i, change) in changes.iter().enumerate().skip(1) {
            let old = change.old.as_ref().unwrap();
            prop_assert_eq!(&old.content()["n"], &json!(values[i - 1]));
        }
    }

    #[test]
    fn prop_typing_always_in_synthetic_slot(
        state_key in proptest::option::of(state_key()),
        sender in proptest::option::of(sender()),
    ) {
        let mut event = json!({"type": TYPING, "content": {"user_ids": []}});
        if let Some(key) = &state_key {
            event["state_key"] = json!(key);
        }
        if let Some(sender) = &sender {
            event["sender"] = json!(sender);
        }

        let mut table = StateTable::new();
        prop_assert!(table.apply(&event).is_applied());

        let stored = table.get_event(TYPING, "typing").unwrap();
        prop_assert_eq!(stored.sender(), "");
        prop_assert_eq!(table.len(), 1);
    }
}
