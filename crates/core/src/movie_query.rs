//! Listing parameters: search, genre filter and sort order.
//!
//! [`MovieQuery`] is the raw `?search=&genre=&sortBy=&sortDirection=` query
//! string. [`MovieQuery::to_list_options`] normalizes it into [`ListOptions`],
//! which the repository turns into SQL.

use serde::{Deserialize, Serialize};

/// Raw query-string parameters for `GET /api/movies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<String>,
}

/// Which column orders the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// Title per direction.
    #[default]
    Title,
    /// Rating per direction, unrated last, ties broken by title ascending.
    Rating,
    /// Creation time per direction.
    Created,
}

impl SortField {
    /// Case-insensitive; anything unrecognised (or absent) sorts by title.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("rating") => SortField::Rating,
            Some("created") => SortField::Created,
            _ => SortField::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `Desc` only for a case-insensitive `"desc"`; everything else is `Asc`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Normalized listing options.
///
/// `search` and `genre` are trimmed and lower-cased, and `None` when the
/// caller sent nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl MovieQuery {
    pub fn to_list_options(&self) -> ListOptions {
        ListOptions {
            search: normalize_filter(self.search.as_deref()),
            genre: normalize_filter(self.genre.as_deref()),
            sort: SortField::parse(self.sort_by.as_deref()),
            direction: SortDirection::parse(self.sort_direction.as_deref()),
        }
    }
}

fn normalize_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
