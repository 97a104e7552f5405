use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{entities::room, error::AppResult, models::Room};

// Rooms are seeded once and never edited through this surface, so the
// repository is read-only.
#[derive(Clone)]
pub struct RoomRepository {
    db: DatabaseConnection,
}

impl RoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Room>> {
        let rows = room::Entity::find().order_by_asc(room::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Room::from).collect())
    }
}
