use crate::error::CatalogError;
use serde_json::Value;

/// The persisted collections. Each owns one JSON document under its storage
/// key and one change signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Categories,
    Fields,
    Companies,
    Enrollments,
    Services,
    WhatsAppAccounts,
    Packages,
}

impl Collection {
    pub fn key(self) -> &'static str {
        match self {
            Collection::Categories => "sport_categories",
            Collection::Fields => "sport_fields",
            Collection::Companies => "companies",
            Collection::Enrollments => "enrollment_types",
            Collection::Services => "additional_services",
            Collection::WhatsAppAccounts => "whatsapp_accounts",
            Collection::Packages => "sport_packages",
        }
    }

    /// Signal name broadcast after every successful mutation of the
    /// collection. Payload-less; observers re-fetch full state.
    pub fn signal(self) -> &'static str {
        match self {
            Collection::Categories => "sport_categories_changed",
            Collection::Fields => "sport_fields_changed",
            Collection::Companies => "companies_changed",
            Collection::Enrollments => "enrollment_types_changed",
            Collection::Services => "additional_services_changed",
            Collection::WhatsAppAccounts => "whatsapp_accounts_changed",
            Collection::Packages => "sport_packages_changed",
        }
    }
}

/// Key-value persistence collaborator. One JSON document per collection key;
/// `set` must replace the whole document (no partial writes).
pub trait StorageProvider: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, CatalogError>;
    fn set(&self, key: &str, value: Value) -> Result<(), CatalogError>;
}

/// Issues opaque entity ids. Injected so normalization stays pure and tests
/// can use deterministic ids.
pub trait IdGenerator: Send + Sync {
    fn next(&self) -> String;
}

/// Observer notified synchronously after each committed mutation.
pub trait ChangeListener: Send + Sync {
    fn on_change(&self, collection: Collection);
}
