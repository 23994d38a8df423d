//! Pure UI helpers extracted from components for non-wasm testing.

use crate::core::ui::SortKey;
use crate::features::movies::state::{MovieFilters, MovieRow};
use crate::models::CollectionStats;
use std::collections::HashMap;

/// Placeholder poster shown when a record has no image or the URL is broken.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450/333/666?text=No+Image";

/// Path for the full collection listing.
#[must_use]
pub const fn list_path() -> &'static str {
    "/api/movies"
}

/// Path for a single record.
#[must_use]
pub fn movie_path(id: &str) -> String {
    format!("/api/movies/{}", urlencoding::encode(id))
}

/// Path for a server-side search, query percent-encoded.
#[must_use]
pub fn search_path(query: &str) -> String {
    format!("/api/movies/search?q={}", urlencoding::encode(query))
}

/// Whether a row matches the search query and genre filter.
///
/// The query matches case-insensitively against title, description, and
/// genre; an empty query matches everything.
#[must_use]
pub fn matches_filters(row: &MovieRow, filters: &MovieFilters) -> bool {
    let query = filters.search.trim().to_lowercase();
    let matches_search = query.is_empty()
        || row.title.to_lowercase().contains(&query)
        || row.description.to_lowercase().contains(&query)
        || row.genre.to_lowercase().contains(&query);
    let matches_genre = filters
        .genre
        .as_deref()
        .is_none_or(|genre| row.genre == genre);
    matches_search && matches_genre
}

/// Filter rows by the active filters, then order them by the sort key.
#[must_use]
pub fn filter_and_sort(rows: &[MovieRow], filters: &MovieFilters, sort: SortKey) -> Vec<MovieRow> {
    let mut out: Vec<MovieRow> = rows
        .iter()
        .filter(|row| matches_filters(row, filters))
        .cloned()
        .collect();
    match sort {
        SortKey::Title => out.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        SortKey::Year => out.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
        SortKey::Rating => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Runtime => {
            out.sort_by(|a, b| b.runtime.unwrap_or(0).cmp(&a.runtime.unwrap_or(0)));
        }
    }
    out
}

/// Distinct genres present in the rows, sorted for the filter dropdown.
#[must_use]
pub fn unique_genres(rows: &[MovieRow]) -> Vec<String> {
    let mut genres: Vec<String> = rows
        .iter()
        .map(|row| row.genre.clone())
        .filter(|genre| !genre.is_empty())
        .collect();
    genres.sort_unstable();
    genres.dedup();
    genres
}

/// Compute the dashboard aggregates for a collection.
#[must_use]
pub fn collection_stats(rows: &[MovieRow]) -> CollectionStats {
    if rows.is_empty() {
        return CollectionStats::default();
    }
    let total = rows.len();
    let sum: f64 = rows.iter().map(|row| row.rating).sum();
    #[allow(clippy::cast_precision_loss)]
    let average_rating = (sum / total as f64 * 10.0).round() / 10.0;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        if !row.genre.is_empty() {
            *counts.entry(row.genre.as_str()).or_default() += 1;
        }
    }
    // Ties break towards the alphabetically-first genre so the stat is stable.
    let top_genre = counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(genre, _)| genre.to_string());

    let minutes: u32 = rows.iter().filter_map(|row| row.runtime).sum();
    CollectionStats {
        total,
        average_rating,
        top_genre,
        total_runtime_hours: minutes / 60,
    }
}

/// Runtime badge label; the service leaves runtime optional.
#[must_use]
pub fn format_runtime(runtime: Option<u32>) -> String {
    runtime.map_or_else(|| "N/A".to_string(), |minutes| format!("{minutes} min"))
}

/// Clip a description for card previews, appending an ellipsis when cut.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{}...", clipped.trim_end())
}

/// Rewrite a YouTube watch URL into its embeddable form for the modal iframe.
#[must_use]
pub fn embed_trailer_url(url: &str) -> String {
    url.replace("watch?v=", "embed/")
}

/// CSS class bucket for a rating badge.
#[must_use]
pub fn rating_class(rating: f64) -> &'static str {
    if rating >= 8.0 {
        "excellent"
    } else if rating >= 6.5 {
        "good"
    } else if rating >= 5.0 {
        "average"
    } else {
        "poor"
    }
}

/// Map a raw login failure onto the copy shown in the error banner.
#[must_use]
pub fn friendly_login_error(detail: &str) -> String {
    if detail.contains("400") || detail.contains("401") {
        "Invalid email or password. Please try again.".to_string()
    } else if detail.contains("Network") || detail.contains("fetch") {
        "Cannot connect to server. Please check your internet connection.".to_string()
    } else if detail.contains("500") {
        "Server error. Please try again later.".to_string()
    } else {
        detail.to_string()
    }
}

/// Map a raw signup failure onto the copy shown in the error banner.
#[must_use]
pub fn friendly_signup_error(detail: &str) -> String {
    if detail.contains("409") || detail.to_lowercase().contains("already exists") {
        "An account with this email already exists.".to_string()
    } else if detail.contains("400") {
        "Invalid signup data. Please check all fields.".to_string()
    } else if detail.contains("Network") || detail.contains("fetch") {
        "Cannot connect to server. Check your internet.".to_string()
    } else if detail.contains("500") {
        "Server error. Please try again later.".to_string()
    } else {
        detail.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, title: &str, genre: &str, year: i32, rating: f64, runtime: Option<u32>) -> MovieRow {
        MovieRow {
            id: id.to_string(),
            title: title.to_string(),
            genre: genre.to_string(),
            release_year: year,
            rating,
            runtime,
            description: format!("About {title}."),
            poster_url: None,
            trailer_url: None,
        }
    }

    fn collection() -> Vec<MovieRow> {
        vec![
            row("1", "The Godfather", "Crime", 1972, 9.2, Some(175)),
            row("2", "Inception", "Sci-Fi", 2010, 8.8, Some(148)),
            row("3", "Parasite", "Thriller", 2019, 8.6, Some(132)),
            row("4", "Goodfellas", "Crime", 1990, 8.7, None),
        ]
    }

    #[test]
    fn paths_encode_their_arguments() {
        assert_eq!(list_path(), "/api/movies");
        assert_eq!(movie_path("64af"), "/api/movies/64af");
        assert_eq!(search_path("dark knight"), "/api/movies/search?q=dark%20knight");
    }

    #[test]
    fn search_matches_title_description_and_genre() {
        let rows = collection();
        let by_title = MovieFilters {
            search: "godfather".to_string(),
            genre: None,
        };
        assert_eq!(filter_and_sort(&rows, &by_title, SortKey::Title).len(), 1);

        let by_genre_text = MovieFilters {
            search: "sci-fi".to_string(),
            genre: None,
        };
        assert_eq!(filter_and_sort(&rows, &by_genre_text, SortKey::Title).len(), 1);

        let by_description = MovieFilters {
            search: "about parasite".to_string(),
            genre: None,
        };
        assert_eq!(filter_and_sort(&rows, &by_description, SortKey::Title).len(), 1);
    }

    #[test]
    fn genre_filter_composes_with_search() {
        let rows = collection();
        let filters = MovieFilters {
            search: String::new(),
            genre: Some("Crime".to_string()),
        };
        let crime = filter_and_sort(&rows, &filters, SortKey::Title);
        assert_eq!(crime.len(), 2);
        assert!(crime.iter().all(|r| r.genre == "Crime"));
    }

    #[test]
    fn sort_orders_match_their_labels() {
        let rows = collection();
        let none = MovieFilters::default();
        let titles: Vec<_> = filter_and_sort(&rows, &none, SortKey::Title)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Goodfellas", "Inception", "Parasite", "The Godfather"]);

        let years: Vec<_> = filter_and_sort(&rows, &none, SortKey::Year)
            .into_iter()
            .map(|r| r.release_year)
            .collect();
        assert_eq!(years, vec![2019, 2010, 1990, 1972]);

        let first_by_rating = filter_and_sort(&rows, &none, SortKey::Rating).remove(0);
        assert_eq!(first_by_rating.title, "The Godfather");

        // Missing runtimes sink to the bottom of the longest-first order.
        let last_by_runtime = filter_and_sort(&rows, &none, SortKey::Runtime).pop().unwrap();
        assert_eq!(last_by_runtime.title, "Goodfellas");
    }

    #[test]
    fn unique_genres_are_sorted_and_deduplicated() {
        assert_eq!(unique_genres(&collection()), vec!["Crime", "Sci-Fi", "Thriller"]);
        assert!(unique_genres(&[]).is_empty());
    }

    #[test]
    fn stats_aggregate_the_collection() {
        let stats = collection_stats(&collection());
        assert_eq!(stats.total, 4);
        assert!((stats.average_rating - 8.8).abs() < f64::EPSILON);
        assert_eq!(stats.top_genre.as_deref(), Some("Crime"));
        // 175 + 148 + 132 minutes, missing runtime ignored.
        assert_eq!(stats.total_runtime_hours, 7);
    }

    #[test]
    fn stats_on_an_empty_collection_are_zeroed() {
        let stats = collection_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.top_genre, None);
    }

    #[test]
    fn preview_clips_long_text_only() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("a long description", 6), "a long...");
    }

    #[test]
    fn trailer_urls_become_embeddable() {
        assert_eq!(
            embed_trailer_url("https://www.youtube.com/watch?v=abc"),
            "https://www.youtube.com/embed/abc"
        );
        assert_eq!(
            embed_trailer_url("https://www.youtube.com/embed/abc"),
            "https://www.youtube.com/embed/abc"
        );
    }

    #[test]
    fn rating_classes_bucket_the_scale() {
        assert_eq!(rating_class(9.0), "excellent");
        assert_eq!(rating_class(7.0), "good");
        assert_eq!(rating_class(5.5), "average");
        assert_eq!(rating_class(3.2), "poor");
    }

    #[test]
    fn runtime_formatting_handles_missing_values() {
        assert_eq!(format_runtime(Some(148)), "148 min");
        assert_eq!(format_runtime(None), "N/A");
    }

    #[test]
    fn login_errors_map_to_friendly_copy() {
        assert!(friendly_login_error("request failed (401): nope").contains("Invalid email"));
        assert!(friendly_login_error("request failed (500)").contains("Server error"));
        assert!(friendly_login_error("Network request error").contains("Cannot connect"));
        assert_eq!(friendly_login_error("odd failure"), "odd failure");
    }

    #[test]
    fn signup_errors_prefer_the_duplicate_account_case() {
        assert!(
            friendly_signup_error("request failed (409): user already exists")
                .contains("already exists")
        );
        assert!(friendly_signup_error("request failed (400)").contains("Invalid signup data"));
    }
}
