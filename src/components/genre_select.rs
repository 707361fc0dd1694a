//! Genre Select Component
//!
//! Checkbox multi-select over the fixed genre vocabulary.

use leptos::prelude::*;

/// Permissible genre labels (TMDB vocabulary)
pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Music",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Thriller",
    "War",
    "Western",
];

/// Checkbox list for picking genres
#[component]
pub fn GenreSelect(
    selected: ReadSignal<Vec<String>>,
    set_selected: WriteSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="genre-select">
            {GENRES.iter().map(|genre| {
                let name = genre.to_string();
                let toggle_name = name.clone();
                let is_checked = move || selected.get().iter().any(|g| g == &name);
                view! {
                    <label class="genre-option">
                        <input
                            type="checkbox"
                            prop:checked=is_checked
                            on:change=move |_| {
                                set_selected.update(|tags| {
                                    if let Some(pos) = tags.iter().position(|g| g == &toggle_name) {
                                        tags.remove(pos);
                                    } else {
                                        tags.push(toggle_name.clone());
                                    }
                                });
                            }
                        />
                        {*genre}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}
