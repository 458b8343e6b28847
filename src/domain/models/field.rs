use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical training field, always attached to one sport category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SportField {
    pub id: String,
    pub title: String,
    pub category_id: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
