//! HTTP-level tests for the read-only director and genre endpoints.

mod common;

use axum::http::StatusCode;
use common::{app, assert_empty, body_json, create_movie, get, ids};
use serde_json::json;

#[tokio::test]
async fn lists_directors() {
    let catalog = common::seeded_catalog().await;
    let resp = get(app(&catalog), "/directors/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([
            {"id": 1, "name": "Denis Villeneuve"},
            {"id": 2, "name": "Christopher Nolan"}
        ])
    );
}

#[tokio::test]
async fn gets_single_director() {
    let catalog = common::seeded_catalog().await;
    let resp = get(app(&catalog), "/directors/2").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"id": 2, "name": "Christopher Nolan"}));
}

#[tokio::test]
async fn missing_director_is_404() {
    let catalog = common::seeded_catalog().await;
    assert_empty(get(app(&catalog), "/directors/42").await, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn empty_tables_list_as_empty_arrays() {
    let catalog = common::catalog().await;
    assert_eq!(body_json(get(app(&catalog), "/directors").await).await, json!([]));
    assert_eq!(body_json(get(app(&catalog), "/genres").await).await, json!([]));
}

#[tokio::test]
async fn lists_genres() {
    let catalog = common::seeded_catalog().await;
    let resp = get(app(&catalog), "/genres/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let names: Vec<_> = body_json(resp)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Drama", "Sci-Fi", "Thriller"]);
}

#[tokio::test]
async fn genre_by_id_lists_its_movies() {
    let catalog = common::seeded_catalog().await;
    let arrival = create_movie(&catalog, json!({"title": "Arrival", "genre_id": 2})).await;
    create_movie(&catalog, json!({"title": "Prisoners", "genre_id": 3})).await;
    let interstellar =
        create_movie(&catalog, json!({"title": "Interstellar", "genre_id": 2})).await;

    let resp = get(app(&catalog), "/genres/2").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    assert_eq!(ids(&list), vec![arrival, interstellar]);
    assert_eq!(list[0]["title"], "Arrival");
}

#[tokio::test]
async fn genre_without_movies_is_404() {
    let catalog = common::seeded_catalog().await;
    assert_empty(get(app(&catalog), "/genres/999").await, StatusCode::NOT_FOUND).await;
    // The genre exists but nothing is filed under it.
    assert_empty(get(app(&catalog), "/genres/1").await, StatusCode::NOT_FOUND).await;
}
