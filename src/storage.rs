//! Local Storage Persistence
//!
//! Browser localStorage keyed by list id; the value is the JSON-encoded
//! movie id sequence. The list registry itself lives under a fixed key.
//! Storage failures degrade: reads come back empty, writes log a warning.

use crate::models::List;

/// Registry key for all known lists
const LISTS_KEY: &str = "movie-lists";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn encode_ids(ids: &[u32]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

/// Malformed or missing values decode to an empty sequence
pub fn decode_ids(raw: Option<&str>) -> Vec<u32> {
    raw.and_then(|value| serde_json::from_str(value).ok())
        .unwrap_or_default()
}

/// Read the persisted id sequence for a list
pub fn load_movie_ids(list_id: &str) -> Vec<u32> {
    let raw = local_storage().and_then(|storage| storage.get_item(list_id).ok().flatten());
    decode_ids(raw.as_deref())
}

/// Write the id sequence for a list
pub fn save_movie_ids(list_id: &str, ids: &[u32]) {
    if let Some(storage) = local_storage() {
        if storage.set_item(list_id, &encode_ids(ids)).is_err() {
            web_sys::console::warn_1(
                &format!("[Storage] Failed to save movie ids for {}", list_id).into(),
            );
        }
    }
}

/// Drop the persisted id sequence for a deleted list
pub fn clear_movie_ids(list_id: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(list_id);
    }
}

/// Read the persisted list registry
pub fn load_lists() -> Vec<List> {
    local_storage()
        .and_then(|storage| storage.get_item(LISTS_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Write the whole list registry
pub fn save_lists(lists: &[List]) {
    let raw = match serde_json::to_string(lists) {
        Ok(raw) => raw,
        Err(_) => return,
    };
    if let Some(storage) = local_storage() {
        if storage.set_item(LISTS_KEY, &raw).is_err() {
            web_sys::console::warn_1(&"[Storage] Failed to save list registry".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        let ids = vec![603, 604, 605];
        assert_eq!(decode_ids(Some(&encode_ids(&ids))), ids);
    }

    #[test]
    fn test_decode_tolerates_bad_input() {
        assert!(decode_ids(None).is_empty());
        assert!(decode_ids(Some("not json")).is_empty());
        assert!(decode_ids(Some("{\"a\":1}")).is_empty());
    }
}
