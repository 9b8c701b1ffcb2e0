use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use openhours_store::csv_import;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::ApiState;

pub const IMPORT_SUCCESS_MESSAGE: &str = "Locations successfully imported from CSV file";
pub const IMPORT_FAILED_MESSAGE: &str = "An error occurred while importing locations from CSV";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub message: String,
    pub imported: usize,
}

/// Imports the configured CSV file into the catalog.
///
/// A missing CSV file imports nothing and still succeeds. Any other failure
/// is logged and answered with `500` and [`IMPORT_FAILED_MESSAGE`].
#[axum::debug_handler]
pub async fn import_csv(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ImportResponse>, Response> {
    let added = csv_import::import_into_store(state.store.as_ref(), &state.csv_path)
        .await
        .map_err(|err| {
            error!(error = ?err, "Error importing locations from CSV");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": IMPORT_FAILED_MESSAGE })),
            )
                .into_response()
        })?;

    Ok(Json(ImportResponse {
        message: IMPORT_SUCCESS_MESSAGE.to_string(),
        imported: added.len(),
    }))
}
