use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type LocationResult<T> = Result<T, LocationError>;

/// Returned when a day name is not one of the seven English weekday names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid day of week: {0:?}")]
pub struct ParseDayError(pub String);
