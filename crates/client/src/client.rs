//! REST client for the `/api/movies` endpoints, built on [`reqwest`].

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use watchlist_core::movie::MovieInput;
use watchlist_core::movie_query::MovieQuery;
use watchlist_core::types::DbId;

use crate::error::ClientError;
use crate::types::Movie;

/// Base URL used when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for one watchlist API server.
#[derive(Debug, Clone)]
pub struct MovieClient {
    client: reqwest::Client,
    base_url: String,
}

/// Shape of the server's JSON error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl MovieClient {
    /// Create a client for the server at `base_url`, e.g. `http://host:3000`.
    ///
    /// A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Create a client for `API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/movies`. Empty query parameters are not sent.
    pub async fn list(&self, query: &MovieQuery) -> Result<Vec<Movie>, ClientError> {
        let params = query_params(query);
        tracing::debug!(?params, "Listing movies");

        let response = self
            .client
            .get(self.movies_url())
            .query(&params)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/movies/{id}`.
    pub async fn get(&self, id: DbId) -> Result<Movie, ClientError> {
        let response = self.client.get(self.movie_url(id)).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/movies`.
    pub async fn create(&self, input: &MovieInput) -> Result<Movie, ClientError> {
        let response = self
            .client
            .post(self.movies_url())
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `PUT /api/movies/{id}`. Every field is replaced.
    pub async fn update(&self, id: DbId, input: &MovieInput) -> Result<Movie, ClientError> {
        let response = self
            .client
            .put(self.movie_url(id))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `DELETE /api/movies/{id}`.
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.movie_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn movies_url(&self) -> String {
        format!("{}/api/movies", self.base_url)
    }

    fn movie_url(&self, id: DbId) -> String {
        format!("{}/api/movies/{id}", self.base_url)
    }

    /// Map a non-success response onto [`ClientError`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let body = serde_json::from_str::<ErrorBody>(&text).ok();

        if status == StatusCode::BAD_REQUEST {
            if let Some(errors) = body.as_ref().and_then(|b| b.errors.clone()) {
                return Err(ClientError::Validation(errors));
            }
        }

        let message = body.and_then(|b| b.error).unwrap_or(text);
        tracing::warn!(status = status.as_u16(), %message, "Watchlist API request failed");
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Query pairs for a listing, skipping absent and blank values.
fn query_params(query: &MovieQuery) -> Vec<(&'static str, &str)> {
    [
        ("search", query.search.as_deref()),
        ("genre", query.genre.as_deref()),
        ("sortBy", query.sort_by.as_deref()),
        ("sortDirection", query.sort_direction.as_deref()),
    ]
    .into_iter()
    .filter_map(|(name, value)| {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| (name, v))
    })
    .collect()
}
