//! Edit-form state and the genre filter dropdown.

use std::collections::BTreeSet;

use watchlist_core::movie::MovieInput;
use watchlist_core::validation::ValidationResult;

use crate::types::Movie;

/// Raw values of the add/edit form. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub genre: String,
    pub rating: Option<i32>,
    pub poster_url: String,
}

impl MovieForm {
    /// Prefill the form from a stored movie.
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone().unwrap_or_default(),
            rating: movie.rating,
            poster_url: movie.poster_url.clone().unwrap_or_default(),
        }
    }

    /// The request body this form submits, normalized the way the server
    /// will store it.
    pub fn to_input(&self) -> MovieInput {
        MovieInput {
            title: self.title.clone(),
            genre: Some(self.genre.clone()),
            rating: self.rating,
            poster_url: Some(self.poster_url.clone()),
        }
        .normalized()
    }

    /// Check the form before submitting.
    ///
    /// Errors mirror what the server would reject. A poster URL that does not
    /// look like a URL only produces a warning; the form still submits.
    pub fn check(&self) -> ValidationResult {
        self.to_input().check_form()
    }
}

/// Genres offered by the filter dropdown.
///
/// Every distinct non-blank genre in `movies`, plus the currently selected
/// filter so it stays visible even when the listing no longer contains it.
pub fn genre_options(movies: &[Movie], selected: Option<&str>) -> Vec<String> {
    movies
        .iter()
        .filter_map(|m| m.genre.as_deref())
        .chain(selected)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
