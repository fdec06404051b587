//! Loads reference data (directors, genres and optionally movies) from a JSON
//! fixture. Directors and genres have no write endpoints, so this is the only
//! way to populate them through the service.

use std::path::Path;

use anyhow::Context;
use sea_orm::{EntityTrait, PaginatorTrait, Set, TransactionTrait};
use serde::Deserialize;

use crate::{
    entities::{director, genre, movie},
    error::AppResult,
    models::MovieInput,
    repository::{Catalog, new_movie},
};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub directors: Vec<NamedRow>,
    #[serde(default)]
    pub genres: Vec<NamedRow>,
    #[serde(default)]
    pub movies: Vec<MovieInput>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamedRow {
    pub id: i32,
    pub name: Option<String>,
}

pub async fn load_file(catalog: &Catalog, path: &Path) -> anyhow::Result<bool> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let fixture: Fixture = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    Ok(apply(catalog, &fixture).await?)
}

/// Inserts the fixture in one transaction. Skipped (returns false) when any
/// director or genre already exists.
pub async fn apply(catalog: &Catalog, fixture: &Fixture) -> AppResult<bool> {
    let db = catalog.db();
    let existing =
        director::Entity::find().count(db).await? + genre::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::debug!(existing, "reference data present, skipping seed");
        return Ok(false);
    }

    let txn = db.begin().await?;

    for row in &fixture.directors {
        let model = director::ActiveModel { id: Set(row.id), name: Set(row.name.clone()) };
        director::Entity::insert(model).exec(&txn).await?;
    }

    for row in &fixture.genres {
        let model = genre::ActiveModel { id: Set(row.id), name: Set(row.name.clone()) };
        genre::Entity::insert(model).exec(&txn).await?;
    }

    for input in &fixture.movies {
        movie::Entity::insert(new_movie(input.clone())).exec(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!(
        directors = fixture.directors.len(),
        genres = fixture.genres.len(),
        movies = fixture.movies.len(),
        "seeded catalog"
    );
    Ok(true)
}
