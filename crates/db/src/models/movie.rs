//! Movie entity model.

use serde::Serialize;
use sqlx::FromRow;
use watchlist_core::types::{DbId, Timestamp};

/// A row from the `movies` table, serialized as the wire representation.
///
/// Absent optional fields serialize as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
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
