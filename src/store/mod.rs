mod categories;
mod companies;
mod enrollments;
mod fields;
mod packages;
pub mod payloads;
mod services;
mod whatsapp;

use crate::config::Config;
use crate::domain::models::package::GroupSchedule;
use crate::domain::ports::{ChangeListener, Collection, IdGenerator, StorageProvider};
use crate::domain::services::schedule;
use crate::error::CatalogError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Owns every catalog collection. All operations are synchronous: each one
/// reads the full collection document, computes the next state and writes it
/// back in a single `set`, so callers never observe a partial update.
/// Cross-operation races (two writers) are the embedding application's
/// concern, as with any last-writer-wins key-value backend.
pub struct CatalogStore {
    config: Config,
    storage: Arc<dyn StorageProvider>,
    ids: Arc<dyn IdGenerator>,
    listeners: RwLock<Vec<(u64, Arc<dyn ChangeListener>)>>,
    next_listener_token: AtomicU64,
}

impl CatalogStore {
    pub fn new(
        config: Config,
        storage: Arc<dyn StorageProvider>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            config,
            storage,
            ids,
            listeners: RwLock::new(Vec::new()),
            next_listener_token: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers an observer; returns a token for `unsubscribe`.
    pub fn subscribe(&self, listener: Arc<dyn ChangeListener>) -> u64 {
        let token = self.next_listener_token.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push((token, listener));
        }
        token
    }

    pub fn unsubscribe(&self, token: u64) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.retain(|(t, _)| *t != token);
        }
    }

    /// Renders a set of group schedules with the configured locale. Thin
    /// wrapper so UI layers never pick a locale themselves.
    pub fn schedule_lines(&self, schedules: &[GroupSchedule]) -> Vec<String> {
        schedule::group_schedule_lines(schedules, self.config.schedule_locale)
    }

    pub(crate) fn next_id(&self) -> String {
        self.ids.next()
    }

    pub(crate) fn load<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, CatalogError> {
        match self.storage.get(collection.key())? {
            Some(value) => serde_json::from_value(value).map_err(|e| {
                CatalogError::Storage(format!("corrupt {} document: {e}", collection.key()))
            }),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn save<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> Result<(), CatalogError> {
        let value = serde_json::to_value(items).map_err(|e| {
            CatalogError::Storage(format!("cannot encode {} document: {e}", collection.key()))
        })?;
        self.storage.set(collection.key(), value)
    }

    /// Persists the collection and broadcasts its signal. Listeners run
    /// synchronously, after the write, in subscription order.
    pub(crate) fn commit<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> Result<(), CatalogError> {
        self.save(collection, items)?;
        self.notify(collection);
        Ok(())
    }

    pub(crate) fn notify(&self, collection: Collection) {
        debug!(signal = collection.signal(), "catalog collection changed");
        if let Ok(listeners) = self.listeners.read() {
            for (_, listener) in listeners.iter() {
                listener.on_change(collection);
            }
        }
    }
}
