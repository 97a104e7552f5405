use jiff::civil::Date;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    entities::{movie, room, showtime},
    error::AppResult,
    models::ReportRow,
};

/// The closed set of ways a showtime report can be narrowed beyond its
/// date range. Each variant binds its ids as query parameters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReportFilter {
    #[default]
    All,
    Room(i32),
    Movie(i32),
    RoomAndMovie { room_id: i32, movie_id: i32 },
}

impl ReportFilter {
    pub fn from_ids(room_id: Option<i32>, movie_id: Option<i32>) -> Self {
        match (room_id, movie_id) {
            (None, None) => ReportFilter::All,
            (Some(room_id), None) => ReportFilter::Room(room_id),
            (None, Some(movie_id)) => ReportFilter::Movie(movie_id),
            (Some(room_id), Some(movie_id)) => ReportFilter::RoomAndMovie { room_id, movie_id },
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct RawRow {
    title: String,
    show_date: String,
    show_time: String,
    room_number: i32,
    duration: Option<i32>,
}

#[derive(Clone)]
pub struct ReportGenerator {
    db: DatabaseConnection,
}

impl ReportGenerator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // Dates are stored as ISO-8601 text, which orders lexicographically,
    // so BETWEEN over the column is an inclusive calendar range.
    pub async fn generate(
        &self,
        start: Date,
        end: Date,
        filter: ReportFilter,
    ) -> AppResult<Vec<ReportRow>> {
        let query = showtime::Entity::find()
            .join(JoinType::InnerJoin, showtime::Relation::Movie.def())
            .join(JoinType::InnerJoin, showtime::Relation::Room.def())
            .select_only()
            .column_as(movie::Column::Title, "title")
            .column_as(showtime::Column::ShowDate, "show_date")
            .column_as(showtime::Column::ShowTime, "show_time")
            .column_as(room::Column::RoomNumber, "room_number")
            .column_as(movie::Column::Duration, "duration")
            .filter(showtime::Column::ShowDate.between(start.to_string(), end.to_string()))
            .order_by_asc(showtime::Column::ShowDate)
            .order_by_asc(showtime::Column::ShowTime);

        let query = match filter {
            ReportFilter::All => query,
            ReportFilter::Room(room_id) => query.filter(showtime::Column::RoomId.eq(room_id)),
            ReportFilter::Movie(movie_id) => {
                query.filter(showtime::Column::MovieId.eq(movie_id))
            },
            ReportFilter::RoomAndMovie { room_id, movie_id } => query
                .filter(showtime::Column::RoomId.eq(room_id))
                .filter(showtime::Column::MovieId.eq(movie_id)),
        };

        let rows = query.into_model::<RawRow>().all(&self.db).await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let Ok(show_date) = row.show_date.parse() else {
                continue;
            };
            let Ok(show_time) = row.show_time.parse() else {
                continue;
            };
            out.push(ReportRow {
                title: row.title,
                show_date,
                show_time,
                room_number: row.room_number,
                duration: row.duration,
            });
        }

        Ok(out)
    }
}
