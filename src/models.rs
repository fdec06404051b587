use serde::{Deserialize, Serialize};

use crate::entities::{director, genre, movie};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieView {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieView {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectorView {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for DirectorView {
    fn from(d: director::Model) -> Self {
        Self { id: d.id, name: d.name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenreView {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for GenreView {
    fn from(g: genre::Model) -> Self {
        Self { id: g.id, name: g.name }
    }
}

/// Writable movie fields. There is no `id` here: an `id` key in a request
/// body is dropped along with any other unknown key.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

pub fn movie_list(rows: Vec<movie::Model>) -> Vec<MovieView> {
    rows.into_iter().map(MovieView::from).collect()
}
