pub mod movie;
pub mod movie_room;
pub mod room;
pub mod showtime;
