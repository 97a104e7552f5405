pub mod assignments;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod movies;
pub mod report;
pub mod rooms;
pub mod seed;

pub use assignments::RoomAssignments;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Movie, ReportRow, Room, RoomLink};
pub use movies::MovieRepository;
pub use report::{ReportFilter, ReportGenerator};
pub use rooms::RoomRepository;
