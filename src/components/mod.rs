//! UI Components
//!
//! Reusable Leptos components.

mod genre_select;
mod initialize_list_form;
mod movie_list_view;

pub use genre_select::{GenreSelect, GENRES};
pub use initialize_list_form::InitializeListForm;
pub use movie_list_view::MovieListView;
