use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sport discipline (football, swimming, ...). `code` is unique across the
/// collection and normalized to a lowercase hyphenated slug.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SportCategory {
    pub id: String,
    pub code: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
