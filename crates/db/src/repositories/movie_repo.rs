//! Repository for the `movies` table.

use sqlx::PgPool;
use watchlist_core::movie::MovieInput;
use watchlist_core::movie_query::{ListOptions, SortDirection, SortField};
use watchlist_core::types::DbId;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, rating, poster_url, created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies matching the filters, in the requested order.
    ///
    /// `search` is a case-insensitive substring match on the title and
    /// `genre` a case-insensitive exact match. Both are expected already
    /// lower-cased by [`watchlist_core::movie_query::MovieQuery::to_list_options`].
    pub async fn list(pool: &PgPool, opts: &ListOptions) -> Result<Vec<Movie>, sqlx::Error> {
        let query = build_list_query(opts);
        tracing::trace!(sql = %query, "Movie list query");

        let mut q = sqlx::query_as::<_, Movie>(&query);
        if let Some(ref search) = opts.search {
            q = q.bind(search);
        }
        if let Some(ref genre) = opts.genre {
            q = q.bind(genre);
        }
        q.fetch_all(pool).await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new movie, returning the created row.
    ///
    /// `input` must already be normalized; `updated_at` starts out NULL.
    pub async fn create(pool: &PgPool, input: &MovieInput) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, rating, poster_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.genre.as_deref())
            .bind(input.rating)
            .bind(input.poster_url.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Replace every editable field of a movie.
    ///
    /// Omitted optional fields are stored as NULL. `created_at` is never
    /// touched. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MovieInput,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                genre = $3,
                rating = $4,
                poster_url = $5,
                updated_at = GREATEST(NOW(), created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.genre.as_deref())
            .bind(input.rating)
            .bind(input.poster_url.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a movie. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the `SELECT` for [`MovieRepo::list`].
///
/// Placeholders are numbered in bind order: search first, then genre.
fn build_list_query(opts: &ListOptions) -> String {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if opts.search.is_some() {
        conditions.push(format!("strpos(LOWER(title), ${bind_idx}) > 0"));
        bind_idx += 1;
    }
    if opts.genre.is_some() {
        conditions.push(format!("LOWER(genre) = ${bind_idx}"));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    format!(
        "SELECT {COLUMNS} FROM movies{where_clause} ORDER BY {}",
        order_clause(opts.sort, opts.direction)
    )
}

fn order_clause(sort: SortField, direction: SortDirection) -> String {
    let dir = direction.as_sql();
    match sort {
        SortField::Title => format!("title {dir}"),
        // Unrated movies trail in both directions.
        SortField::Rating => format!("rating {dir} NULLS LAST, title ASC"),
        SortField::Created => format!("created_at {dir}"),
    }
}
