//! Movie field constraints, normalization and validation.
//!
//! [`MovieInput`] is the request body for both create and update. Updates are
//! full replacements: an omitted optional field clears the stored value.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::validation::{evaluate_rules, RuleCheck, ValidationResult, ValidationRule};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum genre length in characters.
pub const MAX_GENRE_LENGTH: usize = 100;

/// Maximum poster URL length in characters.
pub const MAX_POSTER_URL_LENGTH: usize = 2000;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Wire names of the validated fields.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_GENRE: &str = "genre";
pub const FIELD_RATING: &str = "rating";
pub const FIELD_POSTER_URL: &str = "posterUrl";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Request body for `POST /api/movies` and `PUT /api/movies/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    /// Missing or null titles deserialize as empty so they surface as a
    /// field error.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl MovieInput {
    /// Trim every string field and turn blank optional strings into `None`.
    pub fn normalized(&self) -> MovieInput {
        MovieInput {
            title: self.title.trim().to_string(),
            genre: trim_to_none(self.genre.as_deref()),
            rating: self.rating,
            poster_url: trim_to_none(self.poster_url.as_deref()),
        }
    }

    /// Run the server-side rules against the normalized input.
    ///
    /// Poster URL shape is not checked here; see [`MovieInput::check_form`].
    pub fn validate(&self) -> ValidationResult {
        evaluate_rules(&movie_rules(), &self.normalized().as_field_map())
    }

    /// Run the server-side rules plus the soft poster URL shape check.
    ///
    /// Warnings never make the result invalid.
    pub fn check_form(&self) -> ValidationResult {
        let mut rules = movie_rules();
        rules.extend(form_warning_rules());
        evaluate_rules(&rules, &self.normalized().as_field_map())
    }

    /// Normalize, then validate. Returns the normalized input ready to store.
    pub fn into_validated(self) -> Result<MovieInput, CoreError> {
        let normalized = self.normalized();
        let result = evaluate_rules(&movie_rules(), &normalized.as_field_map());
        if result.is_valid {
            Ok(normalized)
        } else {
            Err(CoreError::Validation(result))
        }
    }

    fn as_field_map(&self) -> serde_json::Map<String, serde_json::Value> {
        serde_json::Map::from_iter([
            (FIELD_TITLE.to_string(), self.title.clone().into()),
            (FIELD_GENRE.to_string(), self.genre.clone().into()),
            (FIELD_RATING.to_string(), self.rating.into()),
            (FIELD_POSTER_URL.to_string(), self.poster_url.clone().into()),
        ])
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn trim_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Blocking rules enforced on every create and update.
pub fn movie_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::error(FIELD_TITLE, RuleCheck::Required, "Title is required."),
        ValidationRule::error(
            FIELD_TITLE,
            RuleCheck::MaxLength(MAX_TITLE_LENGTH),
            format!("Title must be {MAX_TITLE_LENGTH} characters or less."),
        ),
        ValidationRule::error(
            FIELD_GENRE,
            RuleCheck::MaxLength(MAX_GENRE_LENGTH),
            format!("Genre must be {MAX_GENRE_LENGTH} characters or less."),
        ),
        ValidationRule::error(
            FIELD_RATING,
            RuleCheck::IntRange {
                min: MIN_RATING.into(),
                max: MAX_RATING.into(),
            },
            format!("Rating must be between {MIN_RATING} and {MAX_RATING}."),
        ),
        ValidationRule::error(
            FIELD_POSTER_URL,
            RuleCheck::MaxLength(MAX_POSTER_URL_LENGTH),
            format!("Poster URL must be {MAX_POSTER_URL_LENGTH} characters or less."),
        ),
    ]
}

/// Informational rules the client shows but still submits through.
pub fn form_warning_rules() -> Vec<ValidationRule> {
    vec![ValidationRule::warning(
        FIELD_POSTER_URL,
        RuleCheck::UrlShape,
        "Please enter a valid URL.",
    )]
}
