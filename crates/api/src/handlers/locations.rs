//! # Location Handlers
//!
//! Endpoints over the location catalog: the availability filter, lookup by
//! id, and creation.
//!
//! The availability endpoint resolves the requested day (or today, in server
//! local time), takes a snapshot of the catalog, and runs the availability
//! engine over it. The snapshot is an `Arc`, so concurrent appends never
//! block or disturb a request that is already filtering.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::{Datelike, Local};
use openhours_core::{
    availability,
    errors::LocationError,
    models::{
        availability::AvailabilityResponse,
        day::DayOfWeek,
        location::{Location, NewLocation},
    },
};
use serde::Deserialize;
use tracing::info;

use crate::{
    ApiState,
    extract::{AppJson, AppPath, AppQuery},
    middleware::error_handling::AppError,
};

pub const INVALID_DAY_MESSAGE: &str = "Invalid day parameter. Valid values: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday";

/// Query parameters for the available locations endpoint
#[derive(Debug, Default, Deserialize)]
pub struct AvailableQuery {
    /// Weekday name in any case. Missing or empty means today.
    pub day: Option<String>,
}

/// Resolves the `day` query parameter. `None` and `""` fall back to `today`.
pub fn resolve_day(day: Option<&str>, today: DayOfWeek) -> Result<DayOfWeek, LocationError> {
    match day.filter(|d| !d.is_empty()) {
        Some(name) => name
            .parse()
            .map_err(|_| LocationError::Validation(INVALID_DAY_MESSAGE.to_string())),
        None => Ok(today),
    }
}

/// Lists locations open for the whole availability window on a day.
///
/// # Endpoint
///
/// ```text
/// GET /api/locations/available?day=monday
/// ```
///
/// # Errors
///
/// * `LocationError::Validation` - `day` is not a weekday name
/// * `LocationError::Storage` - the catalog could not be read
#[axum::debug_handler]
pub async fn get_available_locations(
    State(state): State<Arc<ApiState>>,
    AppQuery(query): AppQuery<AvailableQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let today = DayOfWeek::from(Local::now().weekday());
    let day = resolve_day(query.day.as_deref(), today)?;

    let locations = state.store.snapshot().await?;
    let response = availability::available_locations(&locations, day, &state.window);

    info!(%day, total_count = response.total_count, "Computed available locations");
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_location_by_id(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<u32>,
) -> Result<Json<Location>, AppError> {
    let location = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| LocationError::NotFound(format!("Location with ID {id} not found")))?;

    Ok(Json(location))
}

/// Creates a location and answers `201 Created` with a `Location` header
/// pointing at it.
#[axum::debug_handler]
pub async fn add_location(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<NewLocation>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let location = state.store.append(payload).await?;
    let uri = format!("/api/locations/{}", location.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, uri)], Json(location)))
}
