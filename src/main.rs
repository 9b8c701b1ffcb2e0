use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use openhours_api::config::ApiConfig;
use openhours_store::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    openhours_api::init_tracing(config.log_level)?;

    // Load the location catalog, seeding it on first run
    let store = JsonFileStore::open(&config.data_path).await;

    // Start API server
    openhours_api::start_server(config, Arc::new(store)).await?;

    Ok(())
}
