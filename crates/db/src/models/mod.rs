//! Row models.
//!
//! Request DTOs live in `watchlist_core` so the HTTP client can share them
//! without pulling in sqlx.

pub mod movie;
