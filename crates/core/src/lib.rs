//! Domain logic for the movie watchlist.
//!
//! Everything here is pure: no database, no HTTP. The `db`, `api` and
//! `client` crates share these types so the server and its callers apply the
//! same normalization and validation rules.

pub mod error;
pub mod movie;
pub mod movie_query;
pub mod types;
pub mod validation;
