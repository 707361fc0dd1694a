//! Movie List Manager App
//!
//! Top-level component: list sidebar with the creation form on the
//! left, the open list's paged view on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{InitializeListForm, MovieListView};
use crate::context::AppContext;
use crate::models::{List, ListInit};
use crate::storage;
use crate::store::{store_add_list, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Registry loaded from storage up front, then kept in the store
    let store: AppStore = Store::new(AppState {
        lists: storage::load_lists(),
    });
    provide_context(store);

    let (selected_list, set_selected_list) = signal::<Option<String>>(None);
    let ctx = AppContext::new((selected_list, set_selected_list));
    provide_context(ctx);

    let on_create = move |init: ListInit| {
        let id = format!("list-{}", js_sys::Date::now() as u64);
        let list = List {
            id: id.clone(),
            name: init.name,
            tags: init.tags,
        };
        store_add_list(&store, list);
        ctx.select_list(Some(id));
    };

    view! {
        <div class="app-layout">
            <aside class="list-sidebar">
                <For
                    each=move || store.lists().get()
                    key=|list| list.id.clone()
                    children=move |list| {
                        let id = list.id.clone();
                        let tab_id = id.clone();
                        let is_active = move || selected_list.get().as_deref() == Some(id.as_str());
                        let tab_class = move || {
                            if is_active() { "list-tab active" } else { "list-tab" }
                        };

                        view! {
                            <button
                                class=tab_class
                                on:click=move |_| ctx.select_list(Some(tab_id.clone()))
                            >
                                {list.name.clone()}
                            </button>
                        }
                    }
                />

                <InitializeListForm on_create=on_create />
            </aside>

            <main class="main-content">
                {move || match selected_list.get() {
                    Some(id) => view! { <MovieListView list_id=id /> }.into_any(),
                    None => view! {
                        <p class="empty-hint">"Select a list or create a new one"</p>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
