//! Movie List Controller
//!
//! Signal-based handle over one list's persisted movie id sequence.
//! Pages details in from TMDB and keeps the persisted sequence in step
//! with the in-memory detail cache across mutations: the id sequence is
//! authoritative, the detail cache is the paged-in view of it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{ListPatch, MovieDto};
use crate::paging;
use crate::storage;
use crate::store::{store_update_list, AppStore};

/// Parameters of one page fetch; identical keys never re-fetch
#[derive(Clone, PartialEq)]
struct PageKey {
    list_id: String,
    page: usize,
    ids: Vec<u32>,
}

/// Handle over one movie list
#[derive(Clone, Copy)]
pub struct MovieList {
    list_id: StoredValue<String>,
    /// Accumulated detail cache for all paged-in ids
    pub movies: ReadSignal<Vec<MovieDto>>,
    set_movies: WriteSignal<Vec<MovieDto>>,
    /// Current page index (zero-based)
    pub page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    /// False once a requested page starts past the end of the sequence
    pub has_more: ReadSignal<bool>,
    set_has_more: WriteSignal<bool>,
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    fetched: StoredValue<Option<PageKey>>,
}

/// Build a controller for `list_id` and page in the first window
pub fn use_movie_list(list_id: &str) -> MovieList {
    let controller = MovieList::new(list_id);

    // Page details in whenever the page index changes
    Effect::new(move |_| {
        let page = controller.page.get();
        controller.fetch_page(page);
    });

    controller
}

impl MovieList {
    fn new(list_id: &str) -> Self {
        let (movies, set_movies) = signal(Vec::<MovieDto>::new());
        let (page, set_page) = signal(0usize);
        let (has_more, set_has_more) = signal(true);
        let (loading, set_loading) = signal(false);

        MovieList {
            list_id: StoredValue::new(list_id.to_string()),
            movies,
            set_movies,
            page,
            set_page,
            has_more,
            set_has_more,
            loading,
            set_loading,
            fetched: StoredValue::new(None),
        }
    }

    pub fn list_id(&self) -> String {
        self.list_id.get_value()
    }

    fn fetch_page(&self, page: usize) {
        let list_id = self.list_id.get_value();
        let ids = storage::load_movie_ids(&list_id);
        let slice: Vec<u32> = paging::page_slice(&ids, page).to_vec();

        if slice.is_empty() {
            if paging::page_exhausted(ids.len(), page) {
                self.set_has_more.set(false);
            }
            return;
        }

        let key = PageKey { list_id, page, ids };
        if self.fetched.with_value(|k| k.as_ref() == Some(&key)) {
            // Same list, page, and id sequence: keep the cached result
            return;
        }

        let controller = *self;
        controller.set_loading.set(true);
        spawn_local(async move {
            match api::fetch_movie_page(&slice).await {
                Ok(batch) => {
                    controller.set_movies.update(|movies| movies.extend(batch));
                    controller.fetched.set_value(Some(key));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!(
                            "[MovieList] Failed to fetch page {} of {}: {}",
                            page,
                            controller.list_id.get_value(),
                            err
                        )
                        .into(),
                    );
                }
            }
            controller.set_loading.set(false);
        });
    }

    /// Install a new detail sequence and persist the derived id sequence.
    /// Every mutation funnels through here, so cache and storage cannot
    /// diverge on membership or order.
    pub fn replace_movies(&self, movies: Vec<MovieDto>) {
        let list_id = self.list_id.get_value();
        let ids = paging::movie_ids(&movies);
        storage::save_movie_ids(&list_id, &ids);

        // Keep the fetch key in step so the current page is not re-fetched
        self.fetched.set_value(Some(PageKey {
            list_id,
            page: self.page.get_untracked(),
            ids,
        }));
        self.set_movies.set(movies);
    }

    /// Append a batch of detail records and persist
    pub fn add_movies(&self, new_movies: Vec<MovieDto>) {
        let mut movies = self.movies.get_untracked();
        movies.extend(new_movies);
        self.replace_movies(movies);
    }

    /// Move one entry from `from` to `to` and persist.
    /// Out-of-range indices are a no-op.
    pub fn reorder_movies(&self, from: usize, to: usize) {
        let mut movies = self.movies.get_untracked();
        if paging::move_entry(&mut movies, from, to) {
            self.replace_movies(movies);
        }
    }

    /// Drop the entry with `movie_id` and persist. Unknown ids are a no-op.
    pub fn remove_movie(&self, movie_id: u32) {
        let mut movies = self.movies.get_untracked();
        if paging::remove_entry(&mut movies, movie_id) {
            self.replace_movies(movies);
        }
    }

    /// Advance to the next page window
    pub fn next_page(&self) {
        self.set_page.update(|page| *page += 1);
    }

    /// Jump to a specific page window
    pub fn set_page(&self, page: usize) {
        self.set_page.set(page);
    }

    /// Merge a metadata update into this list's registry record
    pub fn update_list(&self, store: &AppStore, patch: &ListPatch) {
        store_update_list(store, &self.list_id.get_value(), patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_navigation() {
        let owner = Owner::new();
        let controller = owner.with(|| MovieList::new("list-1"));

        assert_eq!(controller.page.get_untracked(), 0);
        assert!(controller.has_more.get_untracked());

        controller.set_page(3);
        assert_eq!(controller.page.get_untracked(), 3);

        controller.next_page();
        assert_eq!(controller.page.get_untracked(), 4);
        drop(owner);
    }
}
