#![forbid(unsafe_code)]
//! Record-store client boundary.
//!
//! Every read the application performs goes through [`RecordStore`]:
//! list-all, list-by-criteria and fetch-by-id for the two record kinds.
//! The store is always injected as an `Arc<dyn RecordStore>`; there is
//! no ambient client singleton. [`connect`] selects the HTTP
//! implementation when credentials are present and the degrade-to-empty
//! [`EmptyStore`] when they are not.

use async_trait::async_trait;
use katalog_model::{
    AnimalCriteria, AnimalId, AnimalRecord, PlantCriteria, PlantId, PlantRecord,
};
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tracing::warn;

mod config;
mod feed;
mod http;
mod memory;
mod wire;

pub use config::{StoreConfig, ENV_STORE_KEY, ENV_STORE_URL};
pub use feed::{AnimalSource, CollectionSource, FeedPhase, ListFeed, PlantSource};
pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;

pub const CRATE_NAME: &str = "katalog-store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    Transport,
    Status,
    Decode,
}

/// A failed store call. Failures are surfaced to the caller, never
/// collapsed into an empty collection: "zero records" and "query failed"
/// stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

/// Read capabilities consumed from the remote store. Results of the list
/// and search calls arrive ordered by `terakhir_diperbarui` descending.
/// By-id lookups distinguish "no such record" (`Ok(None)`) from a failed
/// call (`Err`).
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, StoreError>;
    async fn search_animals(
        &self,
        criteria: &AnimalCriteria,
    ) -> Result<Vec<AnimalRecord>, StoreError>;
    async fn animal_by_id(&self, id: AnimalId) -> Result<Option<AnimalRecord>, StoreError>;
    async fn list_plants(&self) -> Result<Vec<PlantRecord>, StoreError>;
    async fn search_plants(&self, criteria: &PlantCriteria)
        -> Result<Vec<PlantRecord>, StoreError>;
    async fn plant_by_id(&self, id: &PlantId) -> Result<Option<PlantRecord>, StoreError>;
}

/// Pick the store implementation for the given configuration. Absent
/// credentials select the degrade-to-empty store with a single warning;
/// a missing store is never a startup failure.
#[must_use]
pub fn connect(config: &StoreConfig) -> Arc<dyn RecordStore> {
    match config.credentials() {
        Some((endpoint, access_key)) => {
            Arc::new(HttpRecordStore::new(endpoint.to_string(), access_key.to_string()))
        }
        None => {
            warn!(
                "store credentials not configured; set {ENV_STORE_URL} and {ENV_STORE_KEY}, \
                 serving empty collections"
            );
            Arc::new(EmptyStore)
        }
    }
}

/// Degrade-to-empty store: every read succeeds with nothing in it.
pub struct EmptyStore;

#[async_trait]
impl RecordStore for EmptyStore {
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn search_animals(
        &self,
        _criteria: &AnimalCriteria,
    ) -> Result<Vec<AnimalRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn animal_by_id(&self, _id: AnimalId) -> Result<Option<AnimalRecord>, StoreError> {
        Ok(None)
    }

    async fn list_plants(&self) -> Result<Vec<PlantRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn search_plants(
        &self,
        _criteria: &PlantCriteria,
    ) -> Result<Vec<PlantRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn plant_by_id(&self, _id: &PlantId) -> Result<Option<PlantRecord>, StoreError> {
        Ok(None)
    }
}
