use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Map, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{DirectorView, GenreView, MovieInput, MovieView, movie_list},
    repository::MovieFilter,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).put(replace_movie).delete(delete_movie))
        .route("/directors", get(list_directors))
        .route("/directors/", get(list_directors))
        .route("/directors/{id}", get(get_director))
        .route("/genres", get(list_genres))
        .route("/genres/", get(list_genres))
        .route("/genres/{id}", get(movies_by_genre))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Default)]
pub struct MovieQuery {
    director_id: Option<String>,
    genre_id: Option<String>,
}

impl MovieQuery {
    /// The first value wins when a key is repeated.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "director_id" => &mut q.director_id,
                "genre_id" => &mut q.genre_id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        q
    }

    /// `director_id` wins over `genre_id`. `None` means a filter value was
    /// given that no row can match.
    fn filter(&self) -> Option<MovieFilter> {
        if let Some(raw) = present(&self.director_id) {
            return raw.parse().ok().map(MovieFilter::Director);
        }
        if let Some(raw) = present(&self.genre_id) {
            return raw.parse().ok().map(MovieFilter::Genre);
        }
        Some(MovieFilter::All)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<MovieView>>> {
    let q = MovieQuery::from_pairs(pairs);
    let Some(filter) = q.filter() else {
        tracing::debug!(?q, "filter value is not an id");
        return Ok(Json(Vec::new()));
    };
    let movies = state.catalog.list_movies(filter).await?;
    tracing::debug!(?filter, count = movies.len(), "listed movies");
    Ok(Json(movie_list(movies)))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let Some(fields) = json_object(&body)?.filter(|fields| !fields.is_empty()) else {
        return Err(AppError::EmptyBody);
    };
    let movie = state.catalog.insert_movie(movie_input(fields)?).await?;
    tracing::info!(movie_id = movie.id, "movie created");
    Ok(StatusCode::CREATED)
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> AppResult<Json<MovieView>> {
    let id = parse_id("movie", &raw)?;
    let movie = state.catalog.get_movie(id).await?.ok_or_else(|| not_found("movie", id))?;
    Ok(Json(movie.into()))
}

pub async fn replace_movie(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let id = parse_id("movie", &raw)?;
    let existing = state.catalog.get_movie(id).await?.ok_or_else(|| not_found("movie", id))?;
    let Some(fields) = json_object(&body)? else {
        return Err(AppError::BadRequest("request body is required".to_string()));
    };
    state.catalog.replace_movie(existing, movie_input(fields)?).await?;
    tracing::info!(movie_id = id, "movie replaced");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id("movie", &raw)?;
    if !state.catalog.delete_movie(id).await? {
        return Err(not_found("movie", id));
    }
    tracing::info!(movie_id = id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_directors(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<DirectorView>>> {
    let directors = state.catalog.list_directors().await?;
    Ok(Json(directors.into_iter().map(DirectorView::from).collect()))
}

pub async fn get_director(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> AppResult<Json<DirectorView>> {
    let id = parse_id("director", &raw)?;
    let director =
        state.catalog.get_director(id).await?.ok_or_else(|| not_found("director", id))?;
    Ok(Json(director.into()))
}

pub async fn list_genres(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<GenreView>>> {
    let genres = state.catalog.list_genres().await?;
    Ok(Json(genres.into_iter().map(GenreView::from).collect()))
}

/// `GET /genres/{id}` answers with the movies filed under that genre.
pub async fn movies_by_genre(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> AppResult<Json<Vec<MovieView>>> {
    let id = parse_id("genre", &raw)?;
    let movies = state.catalog.list_movies(MovieFilter::Genre(id)).await?;
    if movies.is_empty() {
        return Err(not_found("genre", id));
    }
    Ok(Json(movie_list(movies)))
}

fn parse_id(entity: &'static str, raw: &str) -> AppResult<i32> {
    raw.parse().map_err(|_| AppError::NotFound { entity, id: raw.to_string() })
}

fn not_found(entity: &'static str, id: i32) -> AppError {
    AppError::NotFound { entity, id: id.to_string() }
}

/// Blank bodies and falsy JSON (`null`, `false`, `0`, `""`, `[]`) yield
/// `None`. Any other non-object is rejected; `{}` is returned as is.
fn json_object(body: &[u8]) -> AppResult<Option<Map<String, Value>>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => Ok(Some(fields)),
        value if is_falsy(&value) => Ok(None),
        other => Err(AppError::BadRequest(format!("expected a JSON object, got {other}"))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

fn movie_input(fields: Map<String, Value>) -> AppResult<MovieInput> {
    Ok(serde_json::from_value(Value::Object(fields))?)
}
