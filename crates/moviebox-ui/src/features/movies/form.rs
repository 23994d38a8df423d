//! Raw form field handling for the movie create/edit forms.
//!
//! Components keep their inputs as strings; everything here turns those
//! strings into a validated [`MovieDraft`] or a field-keyed error list, so
//! the parsing rules stay testable off-wasm.

use crate::features::movies::state::MovieRow;
use moviebox_api_models::{DraftField, DraftIssue, MovieDraft, validate_draft};

/// Raw string state backing the movie form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Title input.
    pub title: String,
    /// Selected genre (empty until chosen).
    pub genre: String,
    /// Release year input.
    pub year: String,
    /// Rating input (slider value).
    pub rating: String,
    /// Runtime input, optional.
    pub runtime: String,
    /// Description textarea.
    pub description: String,
    /// Poster URL input, optional.
    pub poster_url: String,
    /// Trailer URL input, optional.
    pub trailer_url: String,
}

impl FormFields {
    /// Blank form preset for the add flow: current year, mid-scale rating.
    #[must_use]
    pub fn blank(current_year: i32) -> Self {
        Self {
            year: current_year.to_string(),
            rating: "7.0".to_string(),
            ..Self::default()
        }
    }

    /// Prefill the form from an existing row for the edit flows.
    #[must_use]
    pub fn from_row(row: &MovieRow) -> Self {
        Self {
            title: row.title.clone(),
            genre: row.genre.clone(),
            year: row.release_year.to_string(),
            rating: format!("{:.1}", row.rating),
            runtime: row.runtime.map_or_else(String::new, |r| r.to_string()),
            description: row.description.clone(),
            poster_url: row.poster_url.clone().unwrap_or_default(),
            trailer_url: row.trailer_url.clone().unwrap_or_default(),
        }
    }
}

/// Parse and validate the form into a submission payload.
///
/// # Errors
///
/// Returns one [`DraftIssue`] per failed field; parse failures surface on the
/// same field as range failures so the form renders them in one place.
pub fn build_draft(fields: &FormFields, current_year: i32) -> Result<MovieDraft, Vec<DraftIssue>> {
    let mut issues = Vec::new();

    let year = match fields.year.trim().parse::<i32>() {
        Ok(year) => year,
        Err(_) => {
            issues.push(DraftIssue {
                field: DraftField::ReleaseYear,
                message: "Release year is required".to_string(),
            });
            0
        }
    };

    let rating = match fields.rating.trim().parse::<f64>() {
        Ok(rating) => rating,
        Err(_) => {
            issues.push(DraftIssue {
                field: DraftField::Rating,
                message: "Rating must be a number between 0 and 10".to_string(),
            });
            -1.0
        }
    };

    let draft = MovieDraft {
        title: fields.title.trim().to_string(),
        genre: fields.genre.clone(),
        release_year: year,
        rating,
        runtime: fields.runtime.trim().parse::<u32>().ok().filter(|r| *r > 0),
        description: fields.description.trim().to_string(),
        poster_url: optional(&fields.poster_url),
        trailer_url: optional(&fields.trailer_url),
    };

    match validate_draft(&draft, current_year) {
        Ok(()) if issues.is_empty() => Ok(draft),
        Ok(()) => Err(issues),
        Err(mut range_issues) => {
            // Parse failures already explain the field; drop the duplicate.
            range_issues.retain(|issue| !issues.iter().any(|i| i.field == issue.field));
            issues.extend(range_issues);
            Err(issues)
        }
    }
}

/// Look up the message for one field in an issue list.
#[must_use]
pub fn issue_for<'a>(issues: &'a [DraftIssue], field: DraftField) -> Option<&'a str> {
    issues
        .iter()
        .find(|issue| issue.field == field)
        .map(|issue| issue.message.as_str())
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FormFields {
        FormFields {
            title: "Inception".to_string(),
            genre: "Sci-Fi".to_string(),
            year: "2010".to_string(),
            rating: "8.8".to_string(),
            runtime: "148".to_string(),
            description: "Dreams within dreams.".to_string(),
            poster_url: String::new(),
            trailer_url: " https://youtube.com/watch?v=x ".to_string(),
        }
    }

    #[test]
    fn valid_fields_build_a_draft() {
        let draft = build_draft(&fields(), 2026).unwrap();
        assert_eq!(draft.title, "Inception");
        assert_eq!(draft.runtime, Some(148));
        assert_eq!(draft.poster_url, None);
        assert_eq!(draft.trailer_url.as_deref(), Some("https://youtube.com/watch?v=x"));
    }

    #[test]
    fn unparsable_year_surfaces_on_the_year_field() {
        let mut bad = fields();
        bad.year = "soon".to_string();
        let issues = build_draft(&bad, 2026).unwrap_err();
        assert_eq!(issue_for(&issues, DraftField::ReleaseYear), Some("Release year is required"));
        // Only one issue per field even though 0 is also out of range.
        assert_eq!(
            issues.iter().filter(|i| i.field == DraftField::ReleaseYear).count(),
            1
        );
    }

    #[test]
    fn out_of_range_rating_blocks_submission() {
        let mut bad = fields();
        bad.rating = "10.5".to_string();
        let issues = build_draft(&bad, 2026).unwrap_err();
        assert!(issue_for(&issues, DraftField::Rating).is_some());
    }

    #[test]
    fn empty_runtime_is_optional() {
        let mut sparse = fields();
        sparse.runtime = String::new();
        assert_eq!(build_draft(&sparse, 2026).unwrap().runtime, None);
        sparse.runtime = "0".to_string();
        assert_eq!(build_draft(&sparse, 2026).unwrap().runtime, None);
    }

    #[test]
    fn blank_preset_defaults_to_current_year() {
        let blank = FormFields::blank(2026);
        assert_eq!(blank.year, "2026");
        assert_eq!(blank.rating, "7.0");
        assert!(blank.title.is_empty());
    }

    #[test]
    fn row_prefill_round_trips_through_the_draft() {
        let row = MovieRow {
            id: "1".to_string(),
            title: "Heat".to_string(),
            genre: "Crime".to_string(),
            release_year: 1995,
            rating: 8.3,
            runtime: Some(170),
            description: "A score gone wrong.".to_string(),
            poster_url: Some("https://posters.example/heat.jpg".to_string()),
            trailer_url: None,
        };
        let draft = build_draft(&FormFields::from_row(&row), 2026).unwrap();
        assert_eq!(draft.title, row.title);
        assert_eq!(draft.release_year, row.release_year);
        assert_eq!(draft.runtime, row.runtime);
        assert_eq!(draft.poster_url, row.poster_url);
    }
}
