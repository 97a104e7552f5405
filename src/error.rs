use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("movie {0} not found")]
    MovieNotFound(i32),
    #[error("room {0} does not exist")]
    UnknownRoom(i32),
    #[error("movie title must not be empty")]
    EmptyTitle,
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

pub type AppResult<T> = Result<T, AppError>;
