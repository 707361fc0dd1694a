//! Movie List View Component
//!
//! Paged view of one list: drag-to-reorder rows, per-row remove, an
//! add-by-id input, a rename form, and a load-more control driven by
//! the controller.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DndState;

use crate::api;
use crate::context::AppContext;
use crate::models::ListPatch;
use crate::movie_list::use_movie_list;
use crate::storage;
use crate::store::{store_find_list, store_remove_list, use_app_store};

#[component]
pub fn MovieListView(list_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let controller = use_movie_list(&list_id);

    let lid = StoredValue::new(list_id);
    let list_name = move || {
        store_find_list(&store, &lid.get_value())
            .map(|list| list.name)
            .unwrap_or_default()
    };
    let list_tags = move || {
        store_find_list(&store, &lid.get_value())
            .map(|list| list.tags)
            .unwrap_or_default()
    };

    // Drop a dragged row into the slot it was released over
    let dnd = DndState::new();
    dnd.bind_global_handlers(move |movie_id, slot| {
        let movies = controller.movies.get_untracked();
        if let Some(from) = movies.iter().position(|movie| movie.id == movie_id) {
            controller.reorder_movies(from, slot);
        }
    });

    let (add_id, set_add_id) = signal(String::new());
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = match add_id.get().trim().parse::<u32>() {
            Ok(id) => id,
            Err(_) => return,
        };
        spawn_local(async move {
            match api::fetch_movie(id).await {
                Ok(movie) => {
                    controller.add_movies(vec![movie]);
                    set_add_id.set(String::new());
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[MovieListView] Failed to add movie {}: {}", id, err).into(),
                    );
                }
            }
        });
    };

    let (renaming, set_renaming) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let on_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.is_empty() {
            return;
        }
        controller.update_list(
            &store,
            &ListPatch {
                name: Some(name),
                ..Default::default()
            },
        );
        set_renaming.set(false);
    };

    view! {
        <div class="movie-list">
            <header class="movie-list-header">
                {move || if renaming.get() {
                    view! {
                        <form class="rename-form" on:submit=on_rename>
                            <input
                                type="text"
                                placeholder="List name"
                                prop:value=move || new_name.get()
                                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                            />
                            <button type="submit">"Save"</button>
                            <button type="button" on:click=move |_| set_renaming.set(false)>"×"</button>
                        </form>
                    }.into_any()
                } else {
                    view! {
                        <h2 on:click=move |_| {
                            set_new_name.set(list_name());
                            set_renaming.set(true);
                        }>
                            {list_name}
                        </h2>
                    }.into_any()
                }}
                <span class="list-tags">{list_tags}</span>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |_| {
                        let id = lid.get_value();
                        storage::clear_movie_ids(&id);
                        store_remove_list(&store, &id);
                        ctx.select_list(None);
                    }
                >
                    "Delete"
                </button>
                <button
                    type="button"
                    class="close-btn"
                    on:click=move |_| ctx.select_list(None)
                >
                    "×"
                </button>
            </header>

            <form class="movie-add-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="TMDB movie id"
                    prop:value=move || add_id.get()
                    on:input=move |ev| set_add_id.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <div class="movie-rows">
                {move || controller.movies.get().into_iter().enumerate().map(|(idx, movie)| {
                    let movie_id = movie.id;
                    let on_mousedown = dnd.on_row_mousedown(movie_id);
                    let on_mouseenter = dnd.on_row_mouseenter(idx);
                    let on_mouseleave = dnd.on_row_mouseleave();
                    let is_dragging = move || dnd.dragging.get() == Some(movie_id);
                    let is_drop_slot = move || dnd.drop_slot.get() == Some(idx);

                    view! {
                        <div
                            class="movie-row"
                            class:dragging=is_dragging
                            class:drop-target=is_drop_slot
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <span class="movie-title">{movie.title.clone()}</span>
                            <span class="movie-date">{movie.release_date.clone()}</span>
                            <span class="movie-rating">{format!("{:.1}", movie.vote_average)}</span>
                            <button
                                type="button"
                                class="remove-btn"
                                on:click=move |_| controller.remove_movie(movie_id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || controller.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || controller.has_more.get()>
                <button class="load-more" on:click=move |_| controller.next_page()>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
