use crate::domain::ports::StorageProvider;
use crate::error::CatalogError;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// One pretty-printed JSON document per collection key, written via a
/// temporary file and an atomic rename so a crash never leaves a
/// half-written document behind.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| CatalogError::Storage(format!("cannot create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageProvider for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, CatalogError> {
        let path = self.path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CatalogError::Storage(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };
        let value = serde_json::from_str(&raw).map_err(|e| {
            CatalogError::Storage(format!("cannot parse {}: {e}", path.display()))
        })?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CatalogError> {
        let path = self.path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        let raw = serde_json::to_string_pretty(&value)
            .map_err(|e| CatalogError::Storage(format!("cannot encode {key}: {e}")))?;
        fs::write(&tmp, raw)
            .map_err(|e| CatalogError::Storage(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path).map_err(|e| {
            CatalogError::Storage(format!("cannot replace {}: {e}", path.display()))
        })?;
        Ok(())
    }
}
