//! Room name and alias resolution.

use crate::table::StateTable;
use crate::types::{ROOM_ALIASES, ROOM_CANONICAL_ALIAS, ROOM_NAME};

/// Pick a human-readable name for the room from its state.
///
/// In order of preference:
/// 1. the non-empty `name` of `m.room.name` (skipped when `alias_only`)
/// 2. the `alias` of `m.room.canonical_alias`, even if empty
/// 3. the first entry of some server's non-empty `m.room.aliases` list
///
/// Servers in step 3 are visited in hash map order, which is unspecified.
/// When several servers publish aliases, which one wins is arbitrary.
pub fn resolve_room_name(table: &StateTable, alias_only: bool) -> Option<String> {
    if !alias_only {
        let name = table
            .get_event(ROOM_NAME, "")
            .and_then(|event| event.content_str("name"))
            .filter(|name| !name.is_empty());
        if let Some(name) = name {
            return Some(name.to_owned());
        }
    }

    if let Some(alias) = table
        .get_event(ROOM_CANONICAL_ALIAS, "")
        .and_then(|event| event.content_str("alias"))
    {
        return Some(alias.to_owned());
    }

    table
        .events_of_type(ROOM_ALIASES)?
        .values()
        .filter_map(|event| event.content_array("aliases")?.first()?.as_str())
        .next()
        .map(str::to_owned)
}

/// Official name if set, otherwise an alias.
pub fn room_alias(table: &StateTable) -> Option<String> {
    resolve_room_name(table, false)
}
