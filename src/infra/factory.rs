use crate::config::Config;
use crate::domain::ports::StorageProvider;
use crate::error::CatalogError;
use crate::infra::ids::UuidIdGenerator;
use crate::infra::storage::json_file::JsonFileStorage;
use crate::infra::storage::memory::MemoryStorage;
use crate::store::CatalogStore;
use std::sync::Arc;
use tracing::info;

/// Builds a store with the storage backend the configuration asks for:
/// a JSON file directory when one is set, in-memory otherwise.
pub fn bootstrap_store(config: &Config) -> Result<CatalogStore, CatalogError> {
    let storage: Arc<dyn StorageProvider> = match &config.storage_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Initializing JSON file storage");
            Arc::new(JsonFileStorage::new(dir.clone())?)
        }
        None => {
            info!("Initializing in-memory storage");
            Arc::new(MemoryStorage::new())
        }
    };
    Ok(CatalogStore::new(
        config.clone(),
        storage,
        Arc::new(UuidIdGenerator),
    ))
}
