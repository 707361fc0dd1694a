//! List Registry Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The registry
//! is the source of truth for list metadata; every mutation writes the
//! whole collection back to storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{List, ListPatch};
use crate::storage;

/// Global registry of movie lists
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All known lists
    pub lists: Vec<List>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn persist(store: &AppStore) {
    let lists = store.lists().read_untracked();
    storage::save_lists(&lists);
}

/// Merge `patch` into the matching list; non-matching lists untouched
fn merge_into(lists: &mut [List], list_id: &str, patch: &ListPatch) -> bool {
    match lists.iter_mut().find(|list| list.id == list_id) {
        Some(list) => {
            let merged = list.merged(patch);
            *list = merged;
            true
        }
        None => false,
    }
}

/// Drop the matching list from the collection
fn remove_from(lists: &mut Vec<List>, list_id: &str) -> bool {
    let before = lists.len();
    lists.retain(|list| list.id != list_id);
    lists.len() != before
}

/// Add a list to the registry
pub fn store_add_list(store: &AppStore, list: List) {
    store.lists().write().push(list);
    persist(store);
}

/// Merge a metadata update into the matching list; others are untouched
pub fn store_update_list(store: &AppStore, list_id: &str, patch: &ListPatch) {
    {
        let lists_field = store.lists();
        let mut lists = lists_field.write();
        merge_into(&mut lists, list_id, patch);
    }
    persist(store);
}

/// Remove a list from the registry
pub fn store_remove_list(store: &AppStore, list_id: &str) {
    {
        let lists_field = store.lists();
        let mut lists = lists_field.write();
        remove_from(&mut lists, list_id);
    }
    persist(store);
}

/// Look up a list by id
pub fn store_find_list(store: &AppStore, list_id: &str) -> Option<List> {
    store
        .lists()
        .read()
        .iter()
        .find(|list| list.id == list_id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(id: &str, name: &str) -> List {
        List {
            id: id.to_string(),
            name: name.to_string(),
            tags: "Action,Thriller".to_string(),
        }
    }

    #[test]
    fn test_merge_into_leaves_others_untouched() {
        let mut lists = vec![make_list("list-1", "First"), make_list("list-2", "Second")];
        let patch = ListPatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        assert!(merge_into(&mut lists, "list-2", &patch));
        assert_eq!(lists[0].name, "First");
        assert_eq!(lists[1].name, "Renamed");
        assert_eq!(lists[1].id, "list-2");
        assert_eq!(lists[1].tags, "Action,Thriller");

        assert!(!merge_into(&mut lists, "list-9", &patch));
    }

    #[test]
    fn test_remove_from_drops_only_match() {
        let mut lists = vec![make_list("list-1", "First"), make_list("list-2", "Second")];

        assert!(remove_from(&mut lists, "list-1"));
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, "list-2");

        assert!(!remove_from(&mut lists, "list-9"));
        assert_eq!(lists.len(), 1);
    }
}
