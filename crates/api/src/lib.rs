//! # OpenHours API
//!
//! The web server for the OpenHours location service. It exposes the
//! location catalog, the availability filter, CSV import, and a pass-through
//! web search proxy.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Extract**: Request extractors that reject through the same error mapping
//! - **Config**: Handle environment and application configuration
//! - **Search**: Outbound client for the web search API
//!
//! The API uses Axum as the web framework and reads and writes the catalog
//! through the [`LocationStore`] trait.

/// Configuration module for API settings
pub mod config;
/// Extractors that reject with JSON error bodies
pub mod extract;
/// Request handlers that implement business logic
pub mod handlers;
/// Error mapping shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Web search proxy client
pub mod search;

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use openhours_core::availability::AvailabilityWindow;
use openhours_store::LocationStore;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::search::SearchClient;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Location catalog
    pub store: Arc<dyn LocationStore>,
    /// Web search client, absent when no subscription key is configured
    pub search: Option<SearchClient>,
    /// CSV file read by the import endpoint
    pub csv_path: PathBuf,
    /// Window a location must cover to be reported as available
    pub window: AvailabilityWindow,
}

impl ApiState {
    pub fn new(store: Arc<dyn LocationStore>, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            search: None,
            csv_path: csv_path.into(),
            window: AvailabilityWindow::default(),
        }
    }

    pub fn with_search(mut self, search: SearchClient) -> Self {
        self.search = Some(search);
        self
    }
}

/// Installs the global `tracing` subscriber.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the router with every endpoint and request tracing, without CORS
/// or timeouts.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Location catalog and availability endpoints
        .merge(routes::locations::routes())
        // CSV import endpoint
        .merge(routes::import::routes())
        // Web search proxy endpoint
        .merge(routes::search::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Builds the router and wraps it in the CORS and request timeout layers
/// configured in `config`.
pub fn app_with_config(state: Arc<ApiState>, config: &config::ApiConfig) -> Router {
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    app.layer(
        tower::ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}

/// Starts the API server with the provided configuration and store
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use openhours_api::config::ApiConfig;
/// use openhours_store::JsonFileStore;
///
/// let config = ApiConfig::from_env()?;
/// let store = Arc::new(JsonFileStore::open(&config.data_path).await);
/// openhours_api::start_server(config, store).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn LocationStore>) -> Result<()> {
    let mut state = ApiState::new(store, config.csv_path.clone());
    match &config.search_api_key {
        Some(key) => {
            let client =
                SearchClient::with_base_url(key, config.search_timeout, &config.search_base_url)?;
            state = state.with_search(client);
        }
        None => warn!("SEARCH_API_KEY not set, web search proxy disabled"),
    }

    let app = app_with_config(Arc::new(state), &config);

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, starting graceful shutdown");
}
