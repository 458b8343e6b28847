use crate::domain::ports::StorageProvider;
use crate::error::CatalogError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local storage backend. The default for tests and for embedding
/// applications that handle persistence on their own.
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, CatalogError> {
        let data = self
            .data
            .read()
            .map_err(|_| CatalogError::Storage("storage lock poisoned".into()))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CatalogError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| CatalogError::Storage("storage lock poisoned".into()))?;
        data.insert(key.to_string(), value);
        Ok(())
    }
}
