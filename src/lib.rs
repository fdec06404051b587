pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;

use crate::repository::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}
