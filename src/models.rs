use jiff::civil::{Date, Time};
use serde::Serialize;

use crate::entities::{movie, room};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub release_date: Option<Date>,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            genre: m.genre,
            duration: m.duration,
            release_date: m.release_date.and_then(|d| d.parse().ok()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Room {
    pub id: i32,
    pub room_number: i32,
    pub max_capacity: Option<i32>,
}

impl From<room::Model> for Room {
    fn from(r: room::Model) -> Self {
        Self { id: r.id, room_number: r.room_number, max_capacity: r.max_capacity }
    }
}

/// A room a movie is booked into, in the shape the assignment surface
/// hands back to callers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RoomLink {
    pub room_id: i32,
    pub room_number: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub title: String,
    pub show_date: Date,
    pub show_time: Time,
    pub room_number: i32,
    pub duration: Option<i32>,
}
