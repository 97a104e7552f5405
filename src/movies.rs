use jiff::civil::Date;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::{movie, movie_room},
    error::{AppError, AppResult},
    models::Movie,
};

#[derive(Clone)]
pub struct MovieRepository {
    db: DatabaseConnection,
}

impl MovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Movie>> {
        let rows =
            movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    pub async fn create(
        &self,
        title: &str,
        genre: Option<&str>,
        duration: Option<i32>,
        release_date: Option<Date>,
    ) -> AppResult<Movie> {
        if title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }

        let res = movie::Entity::insert(movie::ActiveModel {
            id: Default::default(),
            title: Set(title.to_string()),
            genre: Set(genre.map(str::to_string)),
            duration: Set(duration),
            release_date: Set(release_date.map(|d| d.to_string())),
        })
        .exec(&self.db)
        .await?;

        let created = movie::Entity::find_by_id(res.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::MovieNotFound(res.last_insert_id))?;

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: i32,
        title: &str,
        genre: Option<&str>,
        duration: Option<i32>,
        release_date: Option<Date>,
    ) -> AppResult<Movie> {
        if title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }

        let existing = movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::MovieNotFound(id))?;

        let mut model = existing.into_active_model();
        model.title = Set(title.to_string());
        model.genre = Set(genre.map(str::to_string));
        model.duration = Set(duration);
        model.release_date = Set(release_date.map(|d| d.to_string()));

        let updated = model.update(&self.db).await?;
        Ok(updated.into())
    }

    /// Drops the movie's room assignments first so no dangling link rows
    /// survive the row itself.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if movie::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::MovieNotFound(id));
        }

        movie_room::Entity::delete_many()
            .filter(movie_room::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;

        movie::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
