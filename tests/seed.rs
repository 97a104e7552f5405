mod common;

use jiff::civil::date;
use marquee::{
    MovieRepository, RoomAssignments, RoomRepository,
    entities::{movie, room},
    seed,
};
use sea_orm::{EntityTrait, Set};

#[tokio::test]
async fn seed_populates_demo_rooms_movies_and_link() {
    let (_dir, db) = common::open_store().await;
    seed::seed_if_empty(&db).await.expect("seed");

    let rooms = RoomRepository::new(db.clone()).list_all().await.expect("list rooms");
    let numbers: Vec<_> = rooms.iter().map(|r| (r.room_number, r.max_capacity)).collect();
    assert_eq!(numbers, vec![(1, Some(3)), (2, Some(2))]);

    let movies = MovieRepository::new(db.clone()).list_all().await.expect("list movies");
    assert_eq!(movies.len(), 2);

    assert_eq!(movies[0].title, "Inception");
    assert_eq!(movies[0].genre.as_deref(), Some("Sci-Fi"));
    assert_eq!(movies[0].duration, Some(148));
    assert_eq!(movies[0].release_date, Some(date(2010, 7, 16)));

    assert_eq!(movies[1].title, "The Godfather");
    assert_eq!(movies[1].genre.as_deref(), Some("Crime"));
    assert_eq!(movies[1].duration, Some(175));
    assert_eq!(movies[1].release_date, Some(date(1972, 3, 24)));

    let assignments = RoomAssignments::new(db);
    let links = assignments.rooms_for_movie(movies[0].id).await.expect("inception links");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].room_number, 1);

    let links = assignments.rooms_for_movie(movies[1].id).await.expect("godfather links");
    assert!(links.is_empty());
}

#[tokio::test]
async fn seeding_twice_changes_nothing() {
    let (_dir, db) = common::open_store().await;
    seed::seed_if_empty(&db).await.expect("first seed");

    let movies_before = MovieRepository::new(db.clone()).list_all().await.expect("list movies");
    let rooms_before = RoomRepository::new(db.clone()).list_all().await.expect("list rooms");

    seed::seed_if_empty(&db).await.expect("second seed");

    let movies_after = MovieRepository::new(db.clone()).list_all().await.expect("list movies");
    let rooms_after = RoomRepository::new(db).list_all().await.expect("list rooms");

    assert_eq!(movies_before, movies_after);
    assert_eq!(rooms_before, rooms_after);
}

#[tokio::test]
async fn existing_rooms_suppress_room_seed_and_demo_link() {
    let (_dir, db) = common::open_store().await;

    room::Entity::insert(room::ActiveModel {
        id: Default::default(),
        room_number: Set(7),
        max_capacity: Set(None),
    })
    .exec(&db)
    .await
    .expect("insert room");

    seed::seed_if_empty(&db).await.expect("seed");

    let rooms = RoomRepository::new(db.clone()).list_all().await.expect("list rooms");
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_number, 7);

    let movies = MovieRepository::new(db.clone()).list_all().await.expect("list movies");
    assert_eq!(movies.len(), 2);

    // The demo link only appears when both halves were freshly seeded.
    let links = RoomAssignments::new(db)
        .rooms_for_movie(movies[0].id)
        .await
        .expect("inception links");
    assert!(links.is_empty());
}

#[tokio::test]
async fn existing_movies_suppress_movie_seed() {
    let (_dir, db) = common::open_store().await;

    movie::Entity::insert(movie::ActiveModel {
        id: Default::default(),
        title: Set("House Favorite".to_string()),
        genre: Set(None),
        duration: Set(None),
        release_date: Set(None),
    })
    .exec(&db)
    .await
    .expect("insert movie");

    seed::seed_if_empty(&db).await.expect("seed");

    let movies = MovieRepository::new(db.clone()).list_all().await.expect("list movies");
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "House Favorite");

    let rooms = RoomRepository::new(db).list_all().await.expect("list rooms");
    assert_eq!(rooms.len(), 2);
}
