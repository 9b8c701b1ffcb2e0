use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use eyre::{Result, WrapErr, eyre};
use openhours_core::models::location::{Location, NewLocation};
use tokio::{fs, sync::Mutex};
use tracing::{error, info, warn};

use crate::{LocationStore, seed};

/// Location catalog backed by a JSON file.
///
/// The catalog lives in memory as an `Arc<Vec<Location>>`. Appends take the
/// mutex, copy the vector if a snapshot is still alive, push, and rewrite the
/// file before releasing the lock.
pub struct JsonFileStore {
    path: PathBuf,
    locations: Mutex<Arc<Vec<Location>>>,
}

impl JsonFileStore {
    /// Loads the catalog from `path`.
    ///
    /// A missing file is replaced by the seed catalog, which is written out.
    /// An unreadable or malformed file is logged and the seed catalog is used
    /// in memory only, leaving the file untouched.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let locations = match fs::read_to_string(&path).await {
            Ok(json) => match serde_json::from_str::<Vec<Location>>(&json) {
                Ok(locations) => {
                    info!(count = locations.len(), path = %path.display(), "Loaded locations");
                    locations
                }
                Err(err) => {
                    error!(
                        error = %err,
                        path = %path.display(),
                        "Error loading locations from file"
                    );
                    seed::default_locations()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Locations data file not found. Using default data.");
                let locations = seed::default_locations();
                if let Err(err) = write_locations(&path, &locations).await {
                    error!(error = ?err, "Error saving locations to file");
                }
                locations
            }
            Err(err) => {
                error!(error = %err, path = %path.display(), "Error loading locations from file");
                seed::default_locations()
            }
        };

        Self {
            path,
            locations: Mutex::new(Arc::new(locations)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, locations: &[Location]) {
        if let Err(err) = write_locations(&self.path, locations).await {
            error!(error = ?err, "Error saving locations to file");
        }
    }
}

fn next_id(locations: &[Location]) -> Result<u32> {
    match locations.iter().map(|location| location.id).max() {
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| eyre!("location id space exhausted")),
        None => Ok(1),
    }
}

async fn write_locations(path: &Path, locations: &[Location]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(locations)?;
    fs::write(path, json)
        .await
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[async_trait]
impl LocationStore for JsonFileStore {
    async fn snapshot(&self) -> Result<Arc<Vec<Location>>> {
        Ok(Arc::clone(&*self.locations.lock().await))
    }

    async fn get(&self, id: u32) -> Result<Option<Location>> {
        let locations = self.snapshot().await?;
        Ok(locations.iter().find(|location| location.id == id).cloned())
    }

    async fn append(&self, location: NewLocation) -> Result<Location> {
        let mut guard = self.locations.lock().await;
        let catalog = Arc::make_mut(&mut guard);

        let stored = Location::from_new(next_id(catalog)?, location);
        catalog.push(stored.clone());
        self.persist(catalog).await;

        info!(id = stored.id, name = %stored.name, "Added location");
        Ok(stored)
    }

    async fn append_many(&self, locations: Vec<NewLocation>) -> Result<Vec<Location>> {
        if locations.is_empty() {
            return Ok(Vec::new());
        }

        let mut guard = self.locations.lock().await;
        let catalog = Arc::make_mut(&mut guard);

        let mut added = Vec::with_capacity(locations.len());
        for location in locations {
            let stored = Location::from_new(next_id(catalog)?, location);
            catalog.push(stored.clone());
            added.push(stored);
        }
        self.persist(catalog).await;

        info!(count = added.len(), "Added locations");
        Ok(added)
    }
}
