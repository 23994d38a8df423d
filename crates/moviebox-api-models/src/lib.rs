#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Moviebox public API.
//!
//! The remote collection service predates this client and is loose about both
//! field naming and response envelopes, so the wire contract is kept in one
//! crate: the UI and its tests decode, validate, and normalise payloads
//! through these types rather than re-deriving the mapping per call site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Earliest accepted release year (the first motion pictures).
pub const MIN_RELEASE_YEAR: i32 = 1888;

/// Accepted rating range, inclusive on both ends.
pub const RATING_RANGE: (f64, f64) = (0.0, 10.0);

/// Maximum accepted title length in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum accepted description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// How far past the current year a release year may point.
pub const MAX_FUTURE_YEARS: i32 = 5;

/// Genres accepted by the collection service.
pub const GENRES: [&str; 15] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "War",
    "Western",
];

/// A stored movie record as returned by the collection service.
///
/// The service speaks Mongo-flavoured JSON: the identifier is `_id`, the
/// title travels as `name`, and the poster URL as `image`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Opaque record identifier allocated by the remote store.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    #[serde(rename = "name")]
    pub title: String,
    /// Genre label, one of [`GENRES`] for records created by this client.
    pub genre: String,
    /// Release year.
    pub release_year: i32,
    /// Rating on the 0–10 scale.
    pub rating: f64,
    /// Runtime in minutes, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Poster image URL, when set.
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Trailer URL (YouTube watch or embed form), when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    /// Record creation timestamp, when the service reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Record update timestamp, when the service reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload for a movie record; the service allocates the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    /// Display title.
    #[serde(rename = "name")]
    pub title: String,
    /// Genre label.
    pub genre: String,
    /// Release year.
    pub release_year: i32,
    /// Rating on the 0–10 scale.
    pub rating: f64,
    /// Runtime in minutes, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Poster image URL, when set.
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Trailer URL, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
}

/// Fields of a [`MovieDraft`] that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// The title field.
    Title,
    /// The genre field.
    Genre,
    /// The release year field.
    ReleaseYear,
    /// The rating field.
    Rating,
    /// The description field.
    Description,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftIssue {
    /// Field that failed validation.
    pub field: DraftField,
    /// Human-readable description of the failure.
    pub message: String,
}

impl DraftIssue {
    fn new(field: DraftField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a draft against the contract invariants.
///
/// `current_year` is passed in so callers (and tests) control the clock.
///
/// # Errors
///
/// Returns every failed field as a [`DraftIssue`]; an empty error list is
/// never returned.
pub fn validate_draft(draft: &MovieDraft, current_year: i32) -> Result<(), Vec<DraftIssue>> {
    let mut issues = Vec::new();

    if draft.title.trim().is_empty() {
        issues.push(DraftIssue::new(DraftField::Title, "Movie title is required"));
    } else if draft.title.chars().count() > MAX_TITLE_LEN {
        issues.push(DraftIssue::new(
            DraftField::Title,
            format!("Movie title is too long (max {MAX_TITLE_LEN} characters)"),
        ));
    }

    if draft.genre.trim().is_empty() {
        issues.push(DraftIssue::new(DraftField::Genre, "Please select a genre"));
    } else if !GENRES.contains(&draft.genre.as_str()) {
        issues.push(DraftIssue::new(
            DraftField::Genre,
            format!("Unknown genre '{}'", draft.genre),
        ));
    }

    if draft.release_year < MIN_RELEASE_YEAR {
        issues.push(DraftIssue::new(
            DraftField::ReleaseYear,
            format!("Year must be {MIN_RELEASE_YEAR} or later"),
        ));
    } else if draft.release_year > current_year + MAX_FUTURE_YEARS {
        issues.push(DraftIssue::new(
            DraftField::ReleaseYear,
            format!("Year cannot be more than {MAX_FUTURE_YEARS} years in the future"),
        ));
    }

    if !(RATING_RANGE.0..=RATING_RANGE.1).contains(&draft.rating) {
        issues.push(DraftIssue::new(
            DraftField::Rating,
            "Rating must be between 0 and 10",
        ));
    }

    if draft.description.chars().count() > MAX_DESCRIPTION_LEN {
        issues.push(DraftIssue::new(
            DraftField::Description,
            format!("Description is too long (max {MAX_DESCRIPTION_LEN} characters)"),
        ));
    }

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email, lower-cased and trimmed by the caller.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration request body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Account email, lower-cased and trimmed by the caller.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Request body for `POST /api/auth/forgot-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    /// Account email to send reset instructions to.
    pub email: String,
}

/// Request body for `POST /api/auth/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    /// Reset token from the emailed link.
    pub token: String,
    /// Replacement password.
    pub password: String,
}

/// Normalised authentication payload extracted from an auth response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload {
    /// Opaque session token.
    pub token: String,
    /// Display name, when the service reports one.
    pub name: Option<String>,
    /// Account email, when the service reports one.
    pub email: Option<String>,
    /// Whether the account is a guest session.
    pub guest: bool,
}

/// Extract a token and profile from a loosely shaped auth response.
///
/// Deployed versions of the service have returned the token under `token`,
/// `accessToken`, `authToken`, `jwt`, `jwtToken`, and nested `data` variants
/// of the first two; the profile appears under `user`, `data.user`, or flat
/// on `data`. Returns `None` when no token can be found anywhere.
#[must_use]
pub fn parse_auth_payload(body: &Value) -> Option<AuthPayload> {
    let token = extract_token(body)?;
    let profile = body
        .get("user")
        .or_else(|| body.get("data").and_then(|data| data.get("user")))
        .or_else(|| body.get("data"))
        .unwrap_or(&Value::Null);
    Some(AuthPayload {
        token,
        name: string_field(profile, "name"),
        email: string_field(profile, "email"),
        guest: profile
            .get("isGuest")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn extract_token(body: &Value) -> Option<String> {
    const DIRECT: [&str; 5] = ["token", "accessToken", "authToken", "jwt", "jwtToken"];
    const NESTED: [&str; 2] = ["token", "accessToken"];
    DIRECT
        .iter()
        .find_map(|key| string_field(body, key))
        .or_else(|| {
            let data = body.get("data")?;
            NESTED.iter().find_map(|key| string_field(data, key))
        })
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(ToString::to_string)
}

/// Unwrap a movie-list response of any of the service's envelope shapes.
///
/// Accepts a bare array, `{"data": [...]}`, `{"movies": [...]}`, and
/// `{"data": {"movies": [...]}}`; anything else normalises to the empty
/// list. Entries that fail to decode are dropped rather than failing the
/// whole response.
#[must_use]
pub fn normalize_movie_list(body: Value) -> Vec<Movie> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(mut map) => {
            let nested = map
                .remove("data")
                .map(|data| match data {
                    Value::Array(entries) => Value::Array(entries),
                    Value::Object(mut inner) => inner.remove("movies").unwrap_or(Value::Null),
                    _ => Value::Null,
                })
                .or_else(|| map.remove("movies"));
            match nested {
                Some(Value::Array(entries)) => entries,
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    };
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

/// Pull the most descriptive error message out of a failure response body.
///
/// The service variously reports failures under `error`, `message`, or `msg`.
#[must_use]
pub fn extract_error_message(body: &Value) -> Option<String> {
    ["error", "message", "msg"]
        .iter()
        .find_map(|key| string_field(body, key))
}

/// Lightweight shape check for email addresses.
///
/// Matches the gate the service applies: one `@`, non-empty local part, and
/// a domain containing a dot with text on both sides. No whitespace anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> MovieDraft {
        MovieDraft {
            title: "Inception".to_string(),
            genre: "Sci-Fi".to_string(),
            release_year: 2010,
            rating: 8.8,
            runtime: Some(148),
            description: "A thief who steals corporate secrets.".to_string(),
            poster_url: None,
            trailer_url: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_draft(&draft(), 2026).is_ok());
    }

    #[test]
    fn rating_outside_range_is_rejected() {
        let mut low = draft();
        low.rating = -0.1;
        let issues = validate_draft(&low, 2026).unwrap_err();
        assert!(issues.iter().any(|i| i.field == DraftField::Rating));

        let mut high = draft();
        high.rating = 10.1;
        assert!(validate_draft(&high, 2026).is_err());

        let mut edge = draft();
        edge.rating = 10.0;
        assert!(validate_draft(&edge, 2026).is_ok());
    }

    #[test]
    fn pre_cinema_years_are_rejected() {
        let mut early = draft();
        early.release_year = 1887;
        let issues = validate_draft(&early, 2026).unwrap_err();
        assert!(issues.iter().any(|i| i.field == DraftField::ReleaseYear));

        let mut first = draft();
        first.release_year = MIN_RELEASE_YEAR;
        assert!(validate_draft(&first, 2026).is_ok());
    }

    #[test]
    fn far_future_years_are_rejected() {
        let mut future = draft();
        future.release_year = 2032;
        assert!(validate_draft(&future, 2026).is_err());
        future.release_year = 2031;
        assert!(validate_draft(&future, 2026).is_ok());
    }

    #[test]
    fn empty_title_and_unknown_genre_collect_both_issues() {
        let mut bad = draft();
        bad.title = "  ".to_string();
        bad.genre = "Telenovela".to_string();
        let issues = validate_draft(&bad, 2026).unwrap_err();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.field == DraftField::Title));
        assert!(issues.iter().any(|i| i.field == DraftField::Genre));
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut bad = draft();
        bad.description = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        let issues = validate_draft(&bad, 2026).unwrap_err();
        assert_eq!(issues[0].field, DraftField::Description);
    }

    #[test]
    fn movie_round_trips_service_field_names() {
        let raw = json!({
            "_id": "64af",
            "name": "The Matrix",
            "genre": "Sci-Fi",
            "releaseYear": 1999,
            "rating": 8.7,
            "runtime": 136,
            "description": "A computer hacker learns the truth.",
            "image": "https://posters.example/matrix.jpg",
            "trailerUrl": "https://www.youtube.com/watch?v=vKQi3bBA1y8"
        });
        let movie: Movie = serde_json::from_value(raw).unwrap();
        assert_eq!(movie.id, "64af");
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.poster_url.as_deref(), Some("https://posters.example/matrix.jpg"));

        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back["_id"], "64af");
        assert_eq!(back["name"], "The Matrix");
        assert_eq!(back["image"], "https://posters.example/matrix.jpg");
        assert!(back.get("createdAt").is_none());
    }

    #[test]
    fn list_normalization_unwraps_known_envelopes() {
        let movie = json!({
            "_id": "1", "name": "Alien", "genre": "Horror",
            "releaseYear": 1979, "rating": 8.5, "description": ""
        });
        for body in [
            json!([movie.clone()]),
            json!({"data": [movie.clone()]}),
            json!({"movies": [movie.clone()]}),
            json!({"data": {"movies": [movie.clone()]}}),
        ] {
            let movies = normalize_movie_list(body);
            assert_eq!(movies.len(), 1, "envelope should unwrap to one movie");
            assert_eq!(movies[0].title, "Alien");
        }
    }

    #[test]
    fn list_normalization_treats_unknown_shapes_as_empty() {
        assert!(normalize_movie_list(json!({"count": 3})).is_empty());
        assert!(normalize_movie_list(json!("nope")).is_empty());
        assert!(normalize_movie_list(json!(null)).is_empty());
    }

    #[test]
    fn list_normalization_drops_undecodable_entries() {
        let body = json!([
            {"_id": "1", "name": "Heat", "genre": "Crime", "releaseYear": 1995, "rating": 8.3},
            {"unrelated": true}
        ]);
        let movies = normalize_movie_list(body);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Heat");
    }

    #[test]
    fn auth_payload_finds_tokens_wherever_they_hide() {
        for body in [
            json!({"token": "t1"}),
            json!({"accessToken": "t1"}),
            json!({"jwt": "t1"}),
            json!({"data": {"token": "t1"}}),
            json!({"data": {"accessToken": "t1"}}),
        ] {
            let payload = parse_auth_payload(&body).expect("token should be found");
            assert_eq!(payload.token, "t1");
        }
        assert!(parse_auth_payload(&json!({"ok": true})).is_none());
        assert!(parse_auth_payload(&json!({"token": "   "})).is_none());
    }

    #[test]
    fn auth_payload_reads_nested_profiles() {
        let body = json!({
            "token": "t1",
            "data": {"user": {"name": "Ada", "email": "ada@example.com"}}
        });
        let payload = parse_auth_payload(&body).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ada"));
        assert_eq!(payload.email.as_deref(), Some("ada@example.com"));
        assert!(!payload.guest);

        let guest = json!({"token": "t2", "user": {"name": "Guest User", "isGuest": true}});
        assert!(parse_auth_payload(&guest).unwrap().guest);
    }

    #[test]
    fn error_messages_prefer_the_error_field() {
        let body = json!({"error": "bad credentials", "message": "other"});
        assert_eq!(extract_error_message(&body).as_deref(), Some("bad credentials"));
        assert_eq!(
            extract_error_message(&json!({"msg": "nope"})).as_deref(),
            Some("nope")
        );
        assert!(extract_error_message(&json!({})).is_none());
    }

    #[test]
    fn email_shape_check_matches_expected_inputs() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@com."));
    }
}
