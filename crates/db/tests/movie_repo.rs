//! Integration tests for `MovieRepo` against a real database.

use sqlx::PgPool;
use watchlist_core::movie::MovieInput;
use watchlist_core::movie_query::{ListOptions, MovieQuery, SortDirection, SortField};
use watchlist_db::models::movie::Movie;
use watchlist_db::repositories::MovieRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, genre: Option<&str>, rating: Option<i32>) -> MovieInput {
    MovieInput {
        title: title.to_string(),
        genre: genre.map(str::to_string),
        rating,
        poster_url: None,
    }
}

async fn seed(pool: &PgPool, movies: &[(&str, Option<&str>, Option<i32>)]) -> Vec<Movie> {
    let mut out = Vec::new();
    for (title, genre, rating) in movies {
        out.push(
            MovieRepo::create(pool, &new_movie(title, *genre, *rating))
                .await
                .unwrap(),
        );
    }
    out
}

fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}

fn sorted(sort: SortField, direction: SortDirection) -> ListOptions {
    ListOptions {
        sort,
        direction,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check(pool: PgPool) {
    watchlist_db::health_check(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Inception", Some("Sci-Fi"), Some(5)))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Inception");
    assert_eq!(created.genre.as_deref(), Some("Sci-Fi"));
    assert_eq!(created.rating, Some(5));
    assert_eq!(created.poster_url, None);
    assert!(created.updated_at.is_none());

    let found = MovieRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    assert!(MovieRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Heat", Some("Crime"), Some(4)))
        .await
        .unwrap();

    let updated = MovieRepo::update(&pool, created.id, &new_movie("Heat (1995)", None, None))
        .await
        .unwrap()
        .expect("movie should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Heat (1995)");
    assert_eq!(updated.genre, None);
    assert_eq!(updated.rating, None);
    assert_eq!(updated.created_at, created.created_at);
    let updated_at = updated.updated_at.expect("updated_at should be set");
    assert!(updated_at >= updated.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_repeated_updates_never_move_updated_at_backwards(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Heat", None, None))
        .await
        .unwrap();

    let first = MovieRepo::update(&pool, created.id, &new_movie("Heat", None, Some(4)))
        .await
        .unwrap()
        .unwrap();
    let second = MovieRepo::update(&pool, created.id, &new_movie("Heat", None, Some(5)))
        .await
        .unwrap()
        .unwrap();

    let first_at = first.updated_at.unwrap();
    let second_at = second.updated_at.unwrap();
    assert!(first_at >= created.created_at);
    assert!(second_at >= first_at);
    assert_eq!(second.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = MovieRepo::update(&pool, 42, &new_movie("Ghost", None, None))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_is_permanent(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Alien", None, None))
        .await
        .unwrap();

    assert!(MovieRepo::delete(&pool, created.id).await.unwrap());
    assert!(MovieRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!MovieRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rating_check_constraint(pool: PgPool) {
    let result = MovieRepo::create(&pool, &new_movie("Bad", None, Some(9))).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_defaults_to_title_ascending(pool: PgPool) {
    seed(
        &pool,
        &[("Casablanca", None, None), ("Alien", None, None), ("Blade Runner", None, None)],
    )
    .await;

    let all = MovieRepo::list(&pool, &ListOptions::default()).await.unwrap();
    assert_eq!(titles(&all), vec!["Alien", "Blade Runner", "Casablanca"]);

    let desc = MovieRepo::list(&pool, &sorted(SortField::Title, SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(titles(&desc), vec!["Casablanca", "Blade Runner", "Alien"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_is_case_insensitive_substring(pool: PgPool) {
    seed(
        &pool,
        &[("Inception", None, None), ("Interstellar", None, None), ("Memento", None, None)],
    )
    .await;

    let query = MovieQuery {
        search: Some("INCEP".into()),
        ..Default::default()
    };
    let found = MovieRepo::list(&pool, &query.to_list_options()).await.unwrap();
    assert_eq!(titles(&found), vec!["Inception"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    seed(&pool, &[("100% Wolf", None, None), ("1000 Days", None, None)]).await;

    let opts = ListOptions {
        search: Some("0%".into()),
        ..Default::default()
    };
    let found = MovieRepo::list(&pool, &opts).await.unwrap();
    assert_eq!(titles(&found), vec!["100% Wolf"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_genre_filter_is_exact_and_case_insensitive(pool: PgPool) {
    seed(
        &pool,
        &[
            ("Arrival", Some("Sci-Fi"), None),
            ("Brazil", Some("sci-fi comedy"), None),
            ("Clue", None, None),
        ],
    )
    .await;

    let query = MovieQuery {
        genre: Some("SCI-FI".into()),
        ..Default::default()
    };
    let found = MovieRepo::list(&pool, &query.to_list_options()).await.unwrap();
    assert_eq!(titles(&found), vec!["Arrival"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filters_combine_with_and(pool: PgPool) {
    seed(
        &pool,
        &[
            ("The Thing", Some("Horror"), None),
            ("The Shining", Some("Horror"), None),
            ("The Matrix", Some("Sci-Fi"), None),
        ],
    )
    .await;

    let opts = ListOptions {
        search: Some("thing".into()),
        genre: Some("horror".into()),
        ..Default::default()
    };
    let found = MovieRepo::list(&pool, &opts).await.unwrap();
    assert_eq!(titles(&found), vec!["The Thing"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rating_sort_puts_unrated_last(pool: PgPool) {
    seed(
        &pool,
        &[
            ("Drive", None, None),
            ("Brick", None, Some(3)),
            ("Amelie", None, Some(5)),
            ("Cars", None, Some(3)),
        ],
    )
    .await;

    let desc = MovieRepo::list(&pool, &sorted(SortField::Rating, SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(titles(&desc), vec!["Amelie", "Brick", "Cars", "Drive"]);

    let asc = MovieRepo::list(&pool, &sorted(SortField::Rating, SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(titles(&asc), vec!["Brick", "Cars", "Amelie", "Drive"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_created_sort(pool: PgPool) {
    let movies = seed(
        &pool,
        &[("First", None, None), ("Second", None, None), ("Third", None, None)],
    )
    .await;

    // Pin distinct creation times so the order does not depend on clock resolution.
    for (offset, movie) in movies.iter().enumerate() {
        sqlx::query("UPDATE movies SET created_at = NOW() - make_interval(days => $1) WHERE id = $2")
            .bind(3 - offset as i32)
            .bind(movie.id)
            .execute(&pool)
            .await
            .unwrap();
    }

    let newest_first = MovieRepo::list(&pool, &sorted(SortField::Created, SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(titles(&newest_first), vec!["Third", "Second", "First"]);

    let oldest_first = MovieRepo::list(&pool, &sorted(SortField::Created, SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(titles(&oldest_first), vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_empty_table(pool: PgPool) {
    let all = MovieRepo::list(&pool, &ListOptions::default()).await.unwrap();
    assert!(all.is_empty());
}
