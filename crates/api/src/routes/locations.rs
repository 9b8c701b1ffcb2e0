use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/locations/available",
            get(handlers::locations::get_available_locations),
        )
        .route(
            "/api/locations/:id",
            get(handlers::locations::get_location_by_id),
        )
        .route("/api/locations", post(handlers::locations::add_location))
}
