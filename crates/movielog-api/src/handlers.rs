//! Request handling shared by the path-based routes and the `?path=` dispatcher.

use axum::http::StatusCode;
use axum::response::Response;
use movielog_core::{CatalogError, ListQuery, MovieCatalog};
use movielog_models::{Movie, MovieInput};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use crate::envelope::{respond, Message};
use crate::error::ApiError;
use crate::AppState;

/// Query parameters accepted by the listing (and carried through the dispatcher)
#[derive(Debug, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
}

impl ListParams {
    /// Pick the listing keys out of raw query pairs. Repeated keys do not
    /// fail the request; the last occurrence wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: last_value(pairs, "page"),
            genre: last_value(pairs, "genre"),
            status: last_value(pairs, "status"),
        }
    }

    fn to_query(&self) -> ListQuery {
        ListQuery::from_params(
            self.page.as_deref(),
            self.genre.as_deref(),
            self.status.as_deref(),
        )
    }
}

/// Last value given for `key` in a decoded query string
pub(crate) fn last_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

#[derive(Debug, Deserialize)]
struct InitRequest {
    #[serde(default)]
    movies: Vec<Movie>,
}

/// Run a catalog call on the blocking pool; the store does synchronous file I/O
async fn with_catalog<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&MovieCatalog) -> Result<T, CatalogError> + Send + 'static,
    T: Send + 'static,
{
    let catalog = state.catalog.clone();
    tokio::task::spawn_blocking(move || op(&catalog))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

/// Ids are plain non-negative integers; any other segment is not a route
pub(crate) fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| ApiError::EndpointNotFound)
}

fn parse_input(body: &[u8]) -> Result<MovieInput, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
    MovieInput::from_json(&value).ok_or(ApiError::InvalidJson)
}

#[instrument(skip(state))]
pub async fn list(state: &AppState, params: &ListParams) -> Result<Response, ApiError> {
    let query = params.to_query();
    let page = with_catalog(state, move |catalog| catalog.list(&query)).await?;
    Ok(respond(StatusCode::OK, page))
}

#[instrument(skip(state))]
pub async fn show(state: &AppState, id: &str) -> Result<Response, ApiError> {
    let id = parse_id(id)?;
    let movie = with_catalog(state, move |catalog| catalog.get(id)).await?;
    Ok(respond(StatusCode::OK, movie))
}

#[instrument(skip(state, body))]
pub async fn create(state: &AppState, body: &[u8]) -> Result<Response, ApiError> {
    let input = parse_input(body)?;
    let movie = with_catalog(state, move |catalog| catalog.create(&input)).await?;
    Ok(respond(StatusCode::CREATED, movie))
}

#[instrument(skip(state, body))]
pub async fn update(state: &AppState, id: &str, body: &[u8]) -> Result<Response, ApiError> {
    let id = parse_id(id)?;
    let input = parse_input(body)?;
    let movie = with_catalog(state, move |catalog| catalog.update(id, &input)).await?;
    Ok(respond(StatusCode::OK, movie))
}

#[instrument(skip(state))]
pub async fn remove(state: &AppState, id: &str) -> Result<Response, ApiError> {
    let id = parse_id(id)?;
    with_catalog(state, move |catalog| catalog.delete(id)).await?;
    Ok(respond(StatusCode::OK, Message::new("Movie deleted successfully")))
}

#[instrument(skip(state))]
pub async fn stats(state: &AppState) -> Result<Response, ApiError> {
    let stats = with_catalog(state, |catalog| catalog.stats()).await?;
    Ok(respond(StatusCode::OK, stats))
}

#[instrument(skip(state))]
pub async fn genres(state: &AppState) -> Result<Response, ApiError> {
    let genres = with_catalog(state, |catalog| catalog.genres()).await?;
    Ok(respond(StatusCode::OK, genres))
}

#[instrument(skip(state, body))]
pub async fn init(state: &AppState, body: &[u8]) -> Result<Response, ApiError> {
    let request: InitRequest = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
    let count = with_catalog(state, move |catalog| catalog.initialize(request.movies)).await?;
    Ok(respond(
        StatusCode::CREATED,
        Message::new(format!("Initialized with {} movies", count)),
    ))
}
