//! Handlers for the `/movies` resource.
//!
//! Bodies and ids are extracted as `Result<_, Rejection>` so a malformed
//! payload (400) or an id that is not an integer (404) surfaces through
//! [`AppError`] rather than axum's plain-text rejection.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::error::CoreError;
use watchlist_core::movie::MovieInput;
use watchlist_core::movie_query::MovieQuery;
use watchlist_core::types::DbId;
use watchlist_db::models::movie::Movie;
use watchlist_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Movie";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /api/movies
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let opts = query.to_list_options();
    tracing::debug!(?opts, "Listing movies");
    let movies = MovieRepo::list(&state.pool, &opts).await?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let Path(id) = path?;
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// POST /api/movies
///
/// Responds 201 with a `Location` header pointing at the new movie.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let input = input.into_validated()?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    let location = format!("/api/movies/{}", movie.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(movie)))
}

/// PUT /api/movies/{id}
///
/// Full replacement: optional fields left out of the body are cleared.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let input = input.into_validated()?;

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    if MovieRepo::delete(&state.pool, id).await? {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
