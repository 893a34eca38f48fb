use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use movielog_api::{build_router, AppState};
use movielog_core::{seed_movies, JsonFileStore, MemoryStore, MovieCatalog, MovieStore, StoreError};
use movielog_models::Movie;
use serde_json::{json, Value};
use std::io;
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_app() -> Router {
    app_with(Arc::new(MemoryStore::seeded().unwrap()))
}

/// Serves the sample collection but refuses every write
struct ReadOnlyStore;

impl MovieStore for ReadOnlyStore {
    fn load_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(seed_movies()?)
    }

    fn save_all(&self, _movies: &[Movie]) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume")))
    }

    fn exists(&self) -> bool {
        true
    }
}

fn app_with(store: Arc<dyn MovieStore>) -> Router {
    build_router(AppState::new(MovieCatalog::new(store)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_first_page() {
    let app = seeded_app();
    let (status, body) = send(&app, "GET", "/api/movies", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["movies"].as_array().unwrap().len(), 10);

    let pagination = &body["data"]["pagination"];
    assert_eq!(pagination["currentPage"], 1);
    assert_eq!(pagination["totalPages"], 3);
    assert_eq!(pagination["totalRecords"], 30);
    assert_eq!(pagination["perPage"], 10);
    assert_eq!(pagination["hasNext"], true);
    assert_eq!(pagination["hasPrev"], false);
}

#[tokio::test]
async fn test_list_filters_by_genre_and_status() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        "GET",
        "/api/movies?genre=Horror&status=Completed",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let movies = body["data"]["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 6);
    for movie in movies {
        assert_eq!(movie["genre"], "Horror");
        assert_eq!(movie["watchStatus"], "Completed");
    }
}

#[tokio::test]
async fn test_list_status_with_spaces() {
    let app = seeded_app();
    let (_, body) = send(&app, "GET", "/api/movies?status=Want%20to%20Watch", None).await;
    assert_eq!(body["data"]["pagination"]["totalRecords"], 4);
}

#[tokio::test]
async fn test_list_empty_result_still_has_one_page() {
    let app = seeded_app();
    let (status, body) = send(&app, "GET", "/api/movies?genre=Western&page=abc", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["totalPages"], 1);
    assert_eq!(body["data"]["pagination"]["currentPage"], 1);
    assert!(body["data"]["movies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_one_and_missing() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/api/movies/13", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Oppenheimer");

    let (status, body) = send(&app, "GET", "/api/movies/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Movie not found"}));
}

#[tokio::test]
async fn test_create_assigns_id_above_existing() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/movies",
        Some(json!({"title": "  Heat ", "releaseYear": 1995, "runtime": "170"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 31);
    assert_eq!(body["data"]["title"], "Heat");
    assert_eq!(body["data"]["runtime"], 170);
    assert_eq!(body["data"]["watchStatus"], "Want to Watch");
    assert!(body["data"]["personalRating"].is_null());
    assert!(body["data"]["dateAdded"].is_string());
}

#[tokio::test]
async fn test_create_rejects_early_release_year() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/movies",
        Some(json!({"title": "Test", "releaseYear": 1700})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation failed");
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("Release year must be between 1888 and 2030")));
}

#[tokio::test]
async fn test_create_reports_every_violation() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/movies",
        Some(json!({"title": "", "releaseYear": 3000, "runtime": -1, "personalRating": 12})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_json() {
    let app = seeded_app();
    let (status, body) = send_raw(&app, "POST", "/api/movies", "{\"title\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Invalid JSON"}));
}

#[tokio::test]
async fn test_update_round_trip_keeps_identity() {
    let app = seeded_app();
    let (_, created) = send(&app, "POST", "/api/movies", Some(json!({"title": "Draft"}))).await;
    let id = created["data"]["id"].as_u64().unwrap();
    let date_added = created["data"]["dateAdded"].clone();

    let update = json!({
        "title": "Heat",
        "director": "Michael Mann",
        "releaseYear": 1995,
        "genre": "Crime",
        "runtime": 170,
        "watchStatus": "Completed",
        "personalRating": 9.5,
        "reviewNotes": "Diner scene.",
        "id": 999,
        "dateAdded": "2000-01-01T00:00:00Z"
    });
    let uri = format!("/api/movies/{}", id);
    let (status, _) = send(&app, "PUT", &uri, Some(update)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let movie = &fetched["data"];
    assert_eq!(movie["id"], id);
    assert_eq!(movie["dateAdded"], date_added);
    assert_eq!(movie["title"], "Heat");
    assert_eq!(movie["director"], "Michael Mann");
    assert_eq!(movie["releaseYear"], 1995);
    assert_eq!(movie["genre"], "Crime");
    assert_eq!(movie["runtime"], 170);
    assert_eq!(movie["watchStatus"], "Completed");
    assert_eq!(movie["personalRating"], 9.5);
    assert_eq!(movie["reviewNotes"], "Diner scene.");
}

#[tokio::test]
async fn test_update_missing_movie() {
    let app = seeded_app();
    let (status, body) = send(&app, "PUT", "/api/movies/999", Some(json!({"title": "Heat"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie not found");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = seeded_app();

    let (status, body) = send(&app, "DELETE", "/api/movies/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Movie deleted successfully");

    let (status, _) = send(&app, "GET", "/api/movies/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/movies/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_and_genres() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["total"], 30);
    assert_eq!(stats["completed"], 23);
    assert_eq!(stats["watching"], 3);
    assert_eq!(stats["wantToWatch"], 4);
    assert_eq!(stats["totalRuntime"], 3617);
    assert_eq!(stats["averageRating"], 8.0);
    assert_eq!(stats["ratingCount"], 26);
    assert_eq!(stats["genreBreakdown"]["Action"], 8);
    assert_eq!(stats["yearBreakdown"]["2024"], 30);

    let (status, body) = send(&app, "GET", "/api/genres", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!(["Action", "Animation", "Comedy", "Drama", "Horror", "Musical", "Romance", "Sci-Fi", "Thriller"])
    );
}

#[tokio::test]
async fn test_query_routing_matches_path_routing() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/api?path=movies&page=2&genre=Action", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["currentPage"], 2);
    assert_eq!(body["data"]["pagination"]["totalRecords"], 8);

    let (status, body) = send(&app, "GET", "/api?path=movies/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Dune: Part Two");

    let (status, body) = send(&app, "POST", "/api?path=movies", Some(json!({"title": "Heat"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 31);

    let (status, _) = send(&app, "DELETE", "/api?path=movies/31", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/api?path=stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 30);
}

#[tokio::test]
async fn test_unmatched_routes() {
    let app = seeded_app();

    for (method, uri) in [
        ("GET", "/api?path=directors"),
        ("PATCH", "/api/movies/1"),
        ("POST", "/api/stats"),
        ("GET", "/api/movies/abc"),
        ("GET", "/nothing/here"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body, json!({"success": false, "error": "Endpoint not found"}));
    }
}

#[tokio::test]
async fn test_cors_headers_on_success() {
    let app = seeded_app();
    let response = app
        .oneshot(Request::builder().uri("/api/genres").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        headers.get("access-control-allow-methods").unwrap(),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
}

#[tokio::test]
async fn test_file_store_seeds_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");
    let app = app_with(Arc::new(JsonFileStore::new(&path)));

    let (status, _) = send(&app, "POST", "/api/movies", Some(json!({"title": "Heat"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let saved: Vec<Value> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.len(), 31);
    assert_eq!(saved[30]["title"], "Heat");

    // A fresh router over the same file sees the persisted record
    let reopened = app_with(Arc::new(JsonFileStore::new(&path)));
    let (status, body) = send(&reopened, "GET", "/api/movies/31", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Heat");
}

#[tokio::test]
async fn test_init_only_when_empty() {
    let app = app_with(Arc::new(MemoryStore::empty()));
    let payload = json!({"movies": [{
        "id": 7,
        "title": "Heat",
        "director": "Michael Mann",
        "releaseYear": 1995,
        "genre": "Crime",
        "runtime": 170,
        "watchStatus": "Completed",
        "personalRating": 9.0,
        "reviewNotes": "",
        "dateAdded": "2024-01-01T00:00:00Z"
    }]});

    let (status, body) = send(&app, "POST", "/api/init", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["message"], "Initialized with 1 movies");

    let (status, body) = send(&app, "POST", "/api/init", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Data already exists");

    let (_, body) = send(&app, "GET", "/api/movies/7", None).await;
    assert_eq!(body["data"]["title"], "Heat");
}

#[tokio::test]
async fn test_repeated_query_keys_use_last_value() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/api/movies?page=1&page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["pagination"]["currentPage"], 2);

    let (status, body) = send(&app, "GET", "/api?path=stats&path=movies&page=3&page=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["currentPage"], 3);
}

#[tokio::test]
async fn test_stats_survive_huge_runtimes() {
    let app = app_with(Arc::new(MemoryStore::empty()));
    for _ in 0..3 {
        let (status, _) = send(
            &app,
            "POST",
            "/api/movies",
            Some(json!({"title": "Long", "runtime": 9_000_000_000_000_000_000u64})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["totalRuntime"], u64::MAX);
}

#[tokio::test]
async fn test_create_after_largest_id_is_an_error_not_a_crash() {
    let app = app_with(Arc::new(MemoryStore::empty()));
    let payload = json!({"movies": [{
        "id": u64::MAX,
        "title": "Last",
        "dateAdded": "2024-01-01T00:00:00Z"
    }]});
    let (status, _) = send(&app, "POST", "/api/init", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/movies", Some(json!({"title": "Next"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        format!("No movie ids left above {}", u64::MAX)
    );

    let (_, body) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn test_store_failure_is_500_with_message() {
    let app = app_with(Arc::new(ReadOnlyStore));

    let (status, body) = send(&app, "GET", "/api/movies/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = send(&app, "POST", "/api/movies", Some(json!({"title": "Heat"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "error": "Failed to access movie data: read-only volume"})
    );

    let (status, body) = send(&app, "DELETE", "/api/movies/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to access movie data: read-only volume");
}
