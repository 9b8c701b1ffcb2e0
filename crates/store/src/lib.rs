//! # OpenHours Store
//!
//! Persistence for the location catalog.
//!
//! [`LocationStore`] is the seam the API talks to. [`JsonFileStore`] keeps the
//! catalog in memory behind a mutex and rewrites a pretty-printed JSON file
//! after every append. Readers get an `Arc` snapshot, so a request that is
//! filtering the catalog never observes a half-finished append.

pub mod csv_import;
pub mod json_file;
pub mod mock;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use openhours_core::models::location::{Location, NewLocation};

pub use json_file::JsonFileStore;

#[async_trait]
pub trait LocationStore: Send + Sync {
    /// A consistent view of the whole catalog, in insertion order.
    async fn snapshot(&self) -> Result<Arc<Vec<Location>>>;

    async fn get(&self, id: u32) -> Result<Option<Location>>;

    /// Assigns the next id (highest existing id + 1, or 1 when empty),
    /// appends and persists.
    async fn append(&self, location: NewLocation) -> Result<Location>;

    /// Appends in order under a single lock and persists once.
    async fn append_many(&self, locations: Vec<NewLocation>) -> Result<Vec<Location>>;
}
