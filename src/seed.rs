use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::{debug, info};

use crate::{
    entities::{movie, movie_room, room},
    error::AppResult,
};

const DEMO_ROOMS: [(i32, i32); 2] = [(1, 3), (2, 2)];

const DEMO_MOVIES: [(&str, &str, i32, &str); 2] = [
    ("Inception", "Sci-Fi", 148, "2010-07-16"),
    ("The Godfather", "Crime", 175, "1972-03-24"),
];

/// Inserts the demonstration rooms and movies, each gated on its table
/// being empty, and links the first movie to the first room when both
/// were freshly inserted. Safe to call on every startup.
pub async fn seed_if_empty(db: &DatabaseConnection) -> AppResult<()> {
    let txn = db.begin().await?;

    let rooms_empty = room::Entity::find().one(&txn).await?.is_none();
    let movies_empty = movie::Entity::find().one(&txn).await?.is_none();

    if !rooms_empty && !movies_empty {
        debug!("demo data already present");
        return Ok(());
    }

    let mut first_room_id = None;
    if rooms_empty {
        for (room_number, max_capacity) in DEMO_ROOMS {
            let res = room::Entity::insert(room::ActiveModel {
                id: Default::default(),
                room_number: Set(room_number),
                max_capacity: Set(Some(max_capacity)),
            })
            .exec(&txn)
            .await?;
            first_room_id.get_or_insert(res.last_insert_id);
        }
    }

    let mut first_movie_id = None;
    if movies_empty {
        for (title, genre, duration, release_date) in DEMO_MOVIES {
            let res = movie::Entity::insert(movie::ActiveModel {
                id: Default::default(),
                title: Set(title.to_string()),
                genre: Set(Some(genre.to_string())),
                duration: Set(Some(duration)),
                release_date: Set(Some(release_date.to_string())),
            })
            .exec(&txn)
            .await?;
            first_movie_id.get_or_insert(res.last_insert_id);
        }
    }

    if let (Some(movie_id), Some(room_id)) = (first_movie_id, first_room_id) {
        movie_room::Entity::insert(movie_room::ActiveModel {
            movie_id: Set(movie_id),
            room_id: Set(room_id),
        })
        .exec(&txn)
        .await?;
    }

    txn.commit().await?;

    info!(seeded_rooms = rooms_empty, seeded_movies = movies_empty, "seeded demo data");
    Ok(())
}
