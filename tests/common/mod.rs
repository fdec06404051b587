#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, StatusCode, header::CONTENT_TYPE},
};
use movie_catalog::{
    AppState, db,
    repository::Catalog,
    routes,
    seed::{self, Fixture, NamedRow},
};
use serde_json::Value;
use tower::ServiceExt;

/// Fresh in-memory database. A single pooled connection keeps every query on
/// the same SQLite memory database.
pub async fn catalog() -> Catalog {
    let db = db::connect_and_migrate("sqlite::memory:", 1).await.expect("in-memory database");
    Catalog::new(db)
}

/// Catalog with directors 1..=2 and genres 1..=3 and no movies.
pub async fn seeded_catalog() -> Catalog {
    let catalog = catalog().await;
    let fixture = Fixture {
        directors: vec![named(1, "Denis Villeneuve"), named(2, "Christopher Nolan")],
        genres: vec![named(1, "Drama"), named(2, "Sci-Fi"), named(3, "Thriller")],
        movies: Vec::new(),
    };
    seed::apply(&catalog, &fixture).await.expect("seed");
    catalog
}

fn named(id: i32, name: &str) -> NamedRow {
    NamedRow { id, name: Some(name.to_string()) }
}

pub fn app(catalog: &Catalog) -> Router {
    routes::router(Arc::new(AppState { catalog: catalog.clone() }))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            req = req.header(CONTENT_TYPE, "application/json");
            Body::from(body)
        },
        None => Body::empty(),
    };
    app.oneshot(req.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

/// Asserts the status and that the body is empty.
pub async fn assert_empty(resp: Response<Body>, status: StatusCode) {
    assert_eq!(resp.status(), status);
    assert!(body_bytes(resp).await.is_empty());
}

/// Creates a movie through the API and returns its id, read back from the
/// listing since creation answers with an empty body.
pub async fn create_movie(catalog: &Catalog, json: Value) -> i64 {
    let resp = post_json(app(catalog), "/movies/", json).await;
    assert_empty(resp, StatusCode::CREATED).await;
    let all = body_json(get(app(catalog), "/movies/").await).await;
    all.as_array().unwrap().last().unwrap()["id"].as_i64().unwrap()
}

pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect()
}
