//! # Error Handling Middleware
//!
//! Maps [`LocationError`] values to HTTP status codes and a JSON body of the
//! form `{"error": "..."}`.
//!
//! Client errors carry their own message. Storage and internal failures are
//! logged in full and answered with a generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use openhours_core::errors::LocationError;
use serde_json::json;
use tracing::error;

const GENERIC_ERROR: &str = "An error occurred while processing your request";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use openhours_api::middleware::error_handling::AppError;
/// use openhours_core::errors::LocationError;
///
/// async fn handler(id: u32) -> Result<Json<u32>, AppError> {
///     if id == 0 {
///         return Err(LocationError::NotFound(format!("Location with ID {id} not found")).into());
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub LocationError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LocationError::NotFound(_) => StatusCode::NOT_FOUND,
            LocationError::Validation(_) => StatusCode::BAD_REQUEST,
            LocationError::Upstream(_) => StatusCode::BAD_GATEWAY,
            LocationError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            LocationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LocationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self.0 {
            LocationError::NotFound(message)
            | LocationError::Validation(message)
            | LocationError::Upstream(message)
            | LocationError::Unavailable(message) => message,
            other => {
                error!(error = ?other, "Request failed");
                GENERIC_ERROR.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows `?` on `LocationResult` inside handlers.
impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        AppError(err)
    }
}

/// Store operations return `eyre::Result`; those failures are storage errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(LocationError::Storage(err))
    }
}

// Extractor rejections are client errors and keep axum's description.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(LocationError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(LocationError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(LocationError::Validation(rejection.body_text()))
    }
}

/// Maps a LocationError to an HTTP response
pub fn map_error(err: LocationError) -> Response {
    AppError(err).into_response()
}
