//! Shared UI models and the built-in sample collection.

use moviebox_api_models::Movie;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Aggregates shown on the home dashboard and the browse footer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionStats {
    /// Number of movies in the collection.
    pub total: usize,
    /// Mean rating across the collection.
    pub average_rating: f64,
    /// Most common genre, when any movie has one.
    pub top_genre: Option<String>,
    /// Summed runtime in whole hours.
    pub total_runtime_hours: u32,
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    genre: &str,
    release_year: i32,
    rating: f64,
    runtime: u32,
    description: &str,
    poster: &str,
    trailer: &str,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        genre: genre.to_string(),
        release_year,
        rating,
        runtime: Some(runtime),
        description: description.to_string(),
        poster_url: Some(poster.to_string()),
        trailer_url: Some(trailer.to_string()),
        created_at: None,
        updated_at: None,
    }
}

/// The built-in collection shown when the service is unreachable or empty.
///
/// This is a presentation fallback, not a cache: it keeps the browse and home
/// views populated so a backend outage never renders an empty shelf.
#[must_use]
pub fn sample_movies() -> Vec<Movie> {
    vec![
        sample(
            "1",
            "The Shawshank Redemption",
            "Drama",
            1994,
            9.3,
            142,
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "https://m.media-amazon.com/images/M/MV5BNDE3ODcxYzMtY2YzZC00NmNlLWJiNDMtZDViZWM2MzIxZDYwXkEyXkFqcGdeQXVyNjAwNDUxODI@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/6hB3S9bIaco",
        ),
        sample(
            "2",
            "The Godfather",
            "Crime",
            1972,
            9.2,
            175,
            "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
            "https://m.media-amazon.com/images/M/MV5BM2MyNjYxNmUtYTAwNi00MTYxLWJmNWYtYzZlODY3ZTk3OTFlXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/sY1S34973zA",
        ),
        sample(
            "3",
            "The Dark Knight",
            "Action",
            2008,
            9.0,
            152,
            "When the menace known as the Joker wreaks havoc on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/EXeTwQWrcwY",
        ),
        sample(
            "4",
            "Inception",
            "Sci-Fi",
            2010,
            8.8,
            148,
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
            "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/YoHD9XEInc0",
        ),
        sample(
            "5",
            "Pulp Fiction",
            "Crime",
            1994,
            8.9,
            154,
            "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine in four tales of violence and redemption.",
            "https://m.media-amazon.com/images/M/MV5BNGNhMDIzZTUtNTBlZi00MTRlLWFjM2ItYzViMjE3YzI5MjljXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/s7EdQ4FqbhY",
        ),
        sample(
            "6",
            "Forrest Gump",
            "Drama",
            1994,
            8.8,
            142,
            "The presidencies of Kennedy and Johnson, the events of Vietnam, Watergate, and other historical events unfold from the perspective of an Alabama man with an IQ of 75.",
            "https://m.media-amazon.com/images/M/MV5BNWIwODRlZTUtY2U3ZS00Yzg1LWJhNzYtMmZiYmEyNmU1NjMzXkEyXkFqcGdeQXVyMTQxNzMzNDI@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/bLvqoHBptjg",
        ),
        sample(
            "7",
            "The Matrix",
            "Sci-Fi",
            1999,
            8.7,
            136,
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
            "https://m.media-amazon.com/images/M/MV5BNzQzOTk3OTAtNDQ0Zi00ZTVkLWI0MTEtMDllZjNkYzNjNTc4L2ltYWdlXkEyXkFqcGdeQXVyNjU0OTQ0OTY@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/vKQi3bBA1y8",
        ),
        sample(
            "8",
            "Goodfellas",
            "Crime",
            1990,
            8.7,
            146,
            "The story of Henry Hill and his life in the mob, covering his relationship with his wife Karen Hill and his mob partners.",
            "https://m.media-amazon.com/images/M/MV5BY2NkZjEzMDgtN2RjYy00YzM1LWI4ZmQtMjIwYjFjNmI3ZGEwXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/qo5jJpHtI1Y",
        ),
        sample(
            "9",
            "Interstellar",
            "Sci-Fi",
            2014,
            8.6,
            169,
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "https://m.media-amazon.com/images/M/MV5BZjdkOTU3MDktN2IxOS00OGEyLWFmMjktY2FiMmZkNWIyODZiXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/zSWdZVtXT7E",
        ),
        sample(
            "10",
            "Parasite",
            "Thriller",
            2019,
            8.6,
            132,
            "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
            "https://m.media-amazon.com/images/M/MV5BYWZjMjk3ZTItODQ2ZC00NTY5LWE0ZDYtZTI3MjcwN2Q5NTVkXkEyXkFqcGdeQXVyODk4OTc3MTY@._V1_FMjpg_UX1000_.jpg",
            "https://www.youtube.com/embed/5xH0HfJHsaY",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviebox_api_models::{MovieDraft, validate_draft};

    #[test]
    fn sample_collection_is_never_empty() {
        assert!(!sample_movies().is_empty());
    }

    #[test]
    fn sample_collection_satisfies_the_contract() {
        for movie in sample_movies() {
            let draft = MovieDraft {
                title: movie.title.clone(),
                genre: movie.genre.clone(),
                release_year: movie.release_year,
                rating: movie.rating,
                runtime: movie.runtime,
                description: movie.description.clone(),
                poster_url: movie.poster_url.clone(),
                trailer_url: movie.trailer_url.clone(),
            };
            assert!(
                validate_draft(&draft, 2026).is_ok(),
                "sample record {} should validate",
                movie.title
            );
        }
    }

    #[test]
    fn sample_ids_are_unique() {
        let movies = sample_movies();
        let mut ids: Vec<_> = movies.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), movies.len());
    }
}
