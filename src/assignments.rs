use std::collections::BTreeSet;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::{movie, movie_room, room},
    error::{AppError, AppResult},
    models::RoomLink,
};

#[derive(Clone)]
pub struct RoomAssignments {
    db: DatabaseConnection,
}

impl RoomAssignments {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn rooms_for_movie(&self, movie_id: i32) -> AppResult<Vec<RoomLink>> {
        let rows = movie_room::Entity::find()
            .filter(movie_room::Column::MovieId.eq(movie_id))
            .find_also_related(room::Entity)
            .order_by_asc(movie_room::Column::RoomId)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, r)| {
                r.map(|r| RoomLink { room_id: link.room_id, room_number: r.room_number })
            })
            .collect())
    }

    /// Replaces the movie's full room set in one transaction: a failure at
    /// any step leaves the previous assignments untouched. Duplicate ids in
    /// the input collapse to a single link.
    pub async fn replace_rooms_for_movie(
        &self,
        movie_id: i32,
        room_ids: &[i32],
    ) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if movie::Entity::find_by_id(movie_id).one(&txn).await?.is_none() {
            return Err(AppError::MovieNotFound(movie_id));
        }

        let wanted: BTreeSet<i32> = room_ids.iter().copied().collect();

        let known: BTreeSet<i32> = room::Entity::find()
            .filter(room::Column::Id.is_in(wanted.iter().copied()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();

        if let Some(missing) = wanted.difference(&known).next() {
            return Err(AppError::UnknownRoom(*missing));
        }

        movie_room::Entity::delete_many()
            .filter(movie_room::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await?;

        for room_id in wanted {
            movie_room::Entity::insert(movie_room::ActiveModel {
                movie_id: Set(movie_id),
                room_id: Set(room_id),
            })
            .exec(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
