use serde::{Deserialize, Serialize};
use watchlist_core::types::{DbId, Timestamp};

/// A movie as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub rating: Option<i32>,
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}
