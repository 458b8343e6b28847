use crate::domain::services::schedule::ScheduleLocale;
use std::env;
use std::path::PathBuf;

/// How the package ops treat omitted optional relations (category, company,
/// enrollment). The source product auto-selected the first record; keep that
/// behavior opt-in rather than hardwired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultSelectionPolicy {
    /// Omitted relations are rejected as invalid input.
    Explicit,
    /// Omitted relations fall back to the first existing record.
    FirstAvailable,
}

#[derive(Clone)]
pub struct Config {
    /// Directory for the JSON file storage backend. Unset means in-memory.
    pub storage_dir: Option<PathBuf>,
    pub default_selection: DefaultSelectionPolicy,
    pub schedule_locale: ScheduleLocale,
}

impl Config {
    pub fn from_env() -> Self {
        let storage_dir = env::var("CATALOG_STORAGE_DIR").ok().map(PathBuf::from);
        let default_selection = match env::var("CATALOG_DEFAULT_SELECTION").as_deref() {
            Ok("first-available") => DefaultSelectionPolicy::FirstAvailable,
            _ => DefaultSelectionPolicy::Explicit,
        };
        let schedule_locale = match env::var("CATALOG_LOCALE").as_deref() {
            Ok("it") => ScheduleLocale::Italian,
            _ => ScheduleLocale::English,
        };
        Self {
            storage_dir,
            default_selection,
            schedule_locale,
        }
    }

    /// In-memory configuration with explicit selection, used by tests and
    /// embedding applications that manage persistence themselves.
    pub fn in_memory() -> Self {
        Self {
            storage_dir: None,
            default_selection: DefaultSelectionPolicy::Explicit,
            schedule_locale: ScheduleLocale::English,
        }
    }
}
