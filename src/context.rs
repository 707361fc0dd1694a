//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently open list id - read
    pub selected_list: ReadSignal<Option<String>>,
    set_selected_list: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(selected_list: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            selected_list: selected_list.0,
            set_selected_list: selected_list.1,
        }
    }

    /// Open a list (None returns to the empty state)
    pub fn select_list(&self, id: Option<String>) {
        self.set_selected_list.set(id);
    }
}
