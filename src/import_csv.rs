use std::path::PathBuf;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use openhours_api::config::ApiConfig;
use openhours_store::{JsonFileStore, csv_import};
use tracing::info;

/// Appends the locations in a CSV file to the catalog.
///
/// Usage: `import-csv [path]`. Without a path, `LOCATIONS_CSV_PATH` is used.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    openhours_api::init_tracing(config.log_level)?;

    let csv_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.csv_path.clone());

    let store = JsonFileStore::open(&config.data_path).await;

    info!(path = %csv_path.display(), "Importing locations from CSV");
    let added = csv_import::import_into_store(&store, &csv_path).await?;
    info!(
        imported = added.len(),
        catalog = %store.path().display(),
        "CSV import finished"
    );

    Ok(())
}
