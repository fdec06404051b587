use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::{
    entities::{director, genre, movie},
    error::AppResult,
    models::MovieInput,
};

/// Which movies a collection query should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieFilter {
    All,
    Director(i32),
    Genre(i32),
}

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn list_movies(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        let query = match filter {
            MovieFilter::All => movie::Entity::find(),
            MovieFilter::Director(id) => {
                movie::Entity::find().filter(movie::Column::DirectorId.eq(id))
            },
            MovieFilter::Genre(id) => movie::Entity::find().filter(movie::Column::GenreId.eq(id)),
        };
        Ok(query.order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn insert_movie(&self, input: MovieInput) -> AppResult<movie::Model> {
        Ok(new_movie(input).insert(&self.db).await?)
    }

    /// Overwrites every writable column of a movie already looked up.
    pub async fn replace_movie(
        &self,
        existing: movie::Model,
        input: MovieInput,
    ) -> AppResult<movie::Model> {
        let mut model = existing.into_active_model();
        model.title = Set(input.title);
        model.description = Set(input.description);
        model.trailer = Set(input.trailer);
        model.year = Set(input.year);
        model.rating = Set(input.rating);
        model.genre_id = Set(input.genre_id);
        model.director_id = Set(input.director_id);
        Ok(model.update(&self.db).await?)
    }

    /// Returns false when there was no such movie.
    pub async fn delete_movie(&self, id: i32) -> AppResult<bool> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn list_directors(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().order_by_asc(director::Column::Id).all(&self.db).await?)
    }

    pub async fn get_director(&self, id: i32) -> AppResult<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?)
    }
}

pub(crate) fn new_movie(input: MovieInput) -> movie::ActiveModel {
    movie::ActiveModel {
        id: Default::default(),
        title: Set(input.title),
        description: Set(input.description),
        trailer: Set(input.trailer),
        year: Set(input.year),
        rating: Set(input.rating),
        genre_id: Set(input.genre_id),
        director_id: Set(input.director_id),
    }
}
