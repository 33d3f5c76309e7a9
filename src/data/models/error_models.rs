use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use thiserror::Error;

/// Every failure a handler can report. Rendered as `{error, status}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Database error: {0}")]
    Store(#[from] DieselError),
    #[error("Failed to get DB connection: {0}")]
    Pool(#[from] PoolError),
}
