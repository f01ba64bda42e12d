//! Typed HTTP client for the movie watchlist API.
//!
//! [`MovieClient`] wraps the `/api/movies` endpoints. [`MovieForm`] and
//! [`genre_options`] back an edit form and filter dropdown, applying the same
//! validation rules the server enforces plus the soft poster URL check.

pub mod client;
pub mod error;
pub mod form;
pub mod types;

pub use client::MovieClient;
pub use error::ClientError;
pub use form::{genre_options, MovieForm};
pub use types::Movie;
