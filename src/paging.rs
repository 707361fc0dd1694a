//! List Paging Logic
//!
//! Pure helpers for the movie list controller: fixed-size page windows
//! over the persisted id sequence, and single-element mutations on the
//! detail cache.

use crate::models::MovieDto;

/// Movies fetched per page
pub const PAGE_SIZE: usize = 10;

/// Window of ids for `page` (zero-based)
pub fn page_slice(ids: &[u32], page: usize) -> &[u32] {
    let start = page * PAGE_SIZE;
    if start >= ids.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(ids.len());
    &ids[start..end]
}

/// True once `page` starts at or past the end of a `total`-id sequence
pub fn page_exhausted(total: usize, page: usize) -> bool {
    total <= page * PAGE_SIZE
}

/// Move one entry from `from` to `to` (remove then reinsert).
/// Out-of-range indices are a no-op.
pub fn move_entry(movies: &mut Vec<MovieDto>, from: usize, to: usize) -> bool {
    if from >= movies.len() || to >= movies.len() {
        return false;
    }
    let moved = movies.remove(from);
    movies.insert(to, moved);
    true
}

/// Drop the entry with `movie_id`. Unknown ids are a no-op.
pub fn remove_entry(movies: &mut Vec<MovieDto>, movie_id: u32) -> bool {
    let before = movies.len();
    movies.retain(|movie| movie.id != movie_id);
    movies.len() != before
}

/// Extract the id sequence from the detail cache, order-preserving
pub fn movie_ids(movies: &[MovieDto]) -> Vec<u32> {
    movies.iter().map(|movie| movie.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_movie(id: u32) -> MovieDto {
        MovieDto {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            poster_path: None,
            release_date: "2024-01-01".to_string(),
            vote_average: 7.0,
        }
    }

    #[test]
    fn test_page_slice_windows() {
        let ids: Vec<u32> = (1..=25).collect();

        assert_eq!(page_slice(&ids, 0), &ids[0..10]);
        assert_eq!(page_slice(&ids, 1), &ids[10..20]);
        assert_eq!(page_slice(&ids, 2), &ids[20..25]);
        assert!(page_slice(&ids, 3).is_empty());
    }

    #[test]
    fn test_page_exhausted_at_boundary() {
        // 10 ids fill exactly one page; page 1 is past the end
        assert!(!page_exhausted(10, 0));
        assert!(page_exhausted(10, 1));

        assert!(!page_exhausted(25, 2));
        assert!(page_exhausted(25, 3));
        assert!(page_exhausted(0, 0));
    }

    #[test]
    fn test_move_entry_front_to_back() {
        let mut movies = vec![make_movie(1), make_movie(2), make_movie(3)];

        assert!(move_entry(&mut movies, 0, 2));
        assert_eq!(movie_ids(&movies), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_entry_out_of_range_is_noop() {
        let mut movies = vec![make_movie(1), make_movie(2), make_movie(3)];

        assert!(!move_entry(&mut movies, 3, 0));
        assert!(!move_entry(&mut movies, 0, 3));
        assert_eq!(movie_ids(&movies), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_entry_by_id() {
        let mut movies = vec![make_movie(1), make_movie(2), make_movie(3)];

        assert!(remove_entry(&mut movies, 2));
        assert_eq!(movie_ids(&movies), vec![1, 3]);

        assert!(!remove_entry(&mut movies, 99));
        assert_eq!(movie_ids(&movies), vec![1, 3]);
    }

    #[test]
    fn test_movie_ids_tracks_appends() {
        let mut movies = vec![make_movie(5), make_movie(6)];
        let before = movie_ids(&movies);

        movies.push(make_movie(7));

        let mut expected = before.clone();
        expected.push(7);
        assert_eq!(movie_ids(&movies), expected);
    }
}
