//! Shared movie models and pure state transformations for testing outside wasm.

use moviebox_api_models::{Movie, MovieDraft};
use std::collections::HashMap;
use std::rc::Rc;

/// UI-friendly movie snapshot used across list/state helpers.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieRow {
    /// Opaque record identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Genre label.
    pub genre: String,
    /// Release year.
    pub release_year: i32,
    /// Rating on the 0–10 scale.
    pub rating: f64,
    /// Runtime in minutes, when known.
    pub runtime: Option<u32>,
    /// Free-text description.
    pub description: String,
    /// Poster image URL, when set.
    pub poster_url: Option<String>,
    /// Trailer URL, when set.
    pub trailer_url: Option<String>,
}

impl MovieRow {
    /// One-decimal rating label shown on cards and badges.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

impl From<Movie> for MovieRow {
    fn from(value: Movie) -> Self {
        Self {
            id: value.id,
            title: value.title,
            genre: value.genre,
            release_year: value.release_year,
            rating: value.rating,
            runtime: value.runtime,
            description: value.description,
            poster_url: value.poster_url,
            trailer_url: value.trailer_url,
        }
    }
}

/// Where the rows currently on screen came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Rows came from the collection service.
    #[default]
    Remote,
    /// The service was unreachable or empty; the built-in samples are showing.
    Sample,
}

/// Filter state for the movie list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MovieFilters {
    /// Search query matched against title, description, and genre.
    pub search: String,
    /// Genre filter; `None` shows every genre.
    pub genre: Option<String>,
}

/// Current movies slice stored in the app state.
#[derive(Clone, Debug, PartialEq)]
pub struct MoviesState {
    /// Map of movie rows by id.
    pub by_id: HashMap<String, Rc<MovieRow>>,
    /// Ordered list of visible movie ids.
    pub visible_ids: Vec<String>,
    /// Active filter state used for fetching and display.
    pub filters: MovieFilters,
    /// Source of the rows currently held.
    pub source: DataSource,
    /// Whether the initial fetch is still in flight.
    pub loading: bool,
    /// Last fetch failure, kept for the banner even after the fallback fills in.
    pub last_error: Option<String>,
}

impl Default for MoviesState {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            visible_ids: Vec::new(),
            filters: MovieFilters::default(),
            source: DataSource::Remote,
            loading: true,
            last_error: None,
        }
    }
}

/// Replace list rows with a new snapshot from the given source.
pub fn set_rows(state: &mut MoviesState, rows: Vec<MovieRow>, source: DataSource) {
    state.visible_ids = rows.iter().map(|row| row.id.clone()).collect();
    state.by_id = rows
        .into_iter()
        .map(|row| (row.id.clone(), Rc::new(row)))
        .collect();
    state.source = source;
    state.loading = false;
}

/// Remove a movie row from the list state.
///
/// This is the optimistic half of a delete: the caller fires the remote call
/// separately and the removal stands whatever the outcome.
pub fn remove_row(state: &mut MoviesState, id: &str) {
    state.by_id.remove(id);
    state.visible_ids.retain(|row_id| row_id != id);
}

/// Replace a row with the server's version of the record.
pub fn replace_row(state: &mut MoviesState, row: MovieRow) {
    if state.by_id.contains_key(&row.id) {
        state.by_id.insert(row.id.clone(), Rc::new(row));
    }
}

/// Merge attempted draft changes into the local copy of a row.
///
/// Used when an update's remote call fails: the displayed record keeps the
/// user's edits even though the server never confirmed them.
pub fn merge_draft(state: &mut MoviesState, id: &str, draft: &MovieDraft) {
    let Some(current) = state.by_id.get(id) else {
        return;
    };
    let mut next = (**current).clone();
    next.title = draft.title.clone();
    next.genre = draft.genre.clone();
    next.release_year = draft.release_year;
    next.rating = draft.rating;
    next.runtime = draft.runtime;
    next.description = draft.description.clone();
    next.poster_url = draft.poster_url.clone();
    next.trailer_url = draft.trailer_url.clone();
    state.by_id.insert(id.to_string(), Rc::new(next));
}

/// Read the visible movie rows in list order.
#[must_use]
pub fn select_visible_rows(state: &MoviesState) -> Vec<MovieRow> {
    state
        .visible_ids
        .iter()
        .filter_map(|id| state.by_id.get(id).map(|row| (**row).clone()))
        .collect()
}

/// Read a row by id.
#[must_use]
pub fn select_row(state: &MoviesState, id: &str) -> Option<Rc<MovieRow>> {
    state.by_id.get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, title: &str) -> MovieRow {
        MovieRow {
            id: id.to_string(),
            title: title.to_string(),
            genre: "Drama".to_string(),
            release_year: 1994,
            rating: 9.3,
            runtime: Some(142),
            description: "Hope is a good thing.".to_string(),
            poster_url: None,
            trailer_url: None,
        }
    }

    fn draft(title: &str) -> MovieDraft {
        MovieDraft {
            title: title.to_string(),
            genre: "Crime".to_string(),
            release_year: 1995,
            rating: 8.7,
            runtime: None,
            description: "Edited.".to_string(),
            poster_url: None,
            trailer_url: Some("https://youtube.com/watch?v=x".to_string()),
        }
    }

    #[test]
    fn set_rows_tracks_order_and_source() {
        let mut state = MoviesState::default();
        assert!(state.loading);
        set_rows(&mut state, vec![row("1", "a"), row("2", "b")], DataSource::Remote);
        assert!(!state.loading);
        assert_eq!(state.visible_ids, vec!["1", "2"]);
        assert_eq!(state.source, DataSource::Remote);
        let rows = select_visible_rows(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "a");
    }

    #[test]
    fn remove_row_is_idempotent() {
        let mut state = MoviesState::default();
        set_rows(&mut state, vec![row("1", "a"), row("2", "b")], DataSource::Remote);
        remove_row(&mut state, "1");
        remove_row(&mut state, "1");
        assert_eq!(state.visible_ids, vec!["2"]);
        assert!(select_row(&state, "1").is_none());
    }

    #[test]
    fn replace_row_ignores_unknown_ids() {
        let mut state = MoviesState::default();
        set_rows(&mut state, vec![row("1", "a")], DataSource::Remote);
        replace_row(&mut state, row("9", "ghost"));
        assert!(select_row(&state, "9").is_none());
        replace_row(&mut state, row("1", "renamed"));
        assert_eq!(select_row(&state, "1").unwrap().title, "renamed");
    }

    #[test]
    fn merge_draft_keeps_id_and_applies_edits() {
        let mut state = MoviesState::default();
        set_rows(&mut state, vec![row("1", "a")], DataSource::Remote);
        merge_draft(&mut state, "1", &draft("patched"));
        let merged = select_row(&state, "1").unwrap();
        assert_eq!(merged.id, "1");
        assert_eq!(merged.title, "patched");
        assert_eq!(merged.genre, "Crime");
        assert_eq!(merged.runtime, None);
        assert!(merged.trailer_url.is_some());
        // Unknown ids are a no-op rather than an insert.
        merge_draft(&mut state, "9", &draft("ghost"));
        assert!(select_row(&state, "9").is_none());
    }

    #[test]
    fn row_conversion_preserves_service_fields() {
        let movie = Movie {
            id: "64af".to_string(),
            title: "The Matrix".to_string(),
            genre: "Sci-Fi".to_string(),
            release_year: 1999,
            rating: 8.7,
            runtime: Some(136),
            description: "Free your mind.".to_string(),
            poster_url: Some("https://posters.example/m.jpg".to_string()),
            trailer_url: None,
            created_at: None,
            updated_at: None,
        };
        let row = MovieRow::from(movie);
        assert_eq!(row.id, "64af");
        assert_eq!(row.rating_label(), "8.7");
        assert_eq!(row.poster_url.as_deref(), Some("https://posters.example/m.jpg"));
    }
}
