use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use openhours_core::models::location::{Location, NewLocation};

// Mock store for handler tests
mock! {
    pub LocationStore {}

    #[async_trait]
    impl crate::LocationStore for LocationStore {
        async fn snapshot(&self) -> eyre::Result<Arc<Vec<Location>>>;

        async fn get(&self, id: u32) -> eyre::Result<Option<Location>>;

        async fn append(&self, location: NewLocation) -> eyre::Result<Location>;

        async fn append_many(
            &self,
            locations: Vec<NewLocation>,
        ) -> eyre::Result<Vec<Location>>;
    }
}
