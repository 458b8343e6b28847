use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference lookup for how a member joins a package (annual membership,
/// trial, tournament entry, ...).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnrollmentType {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
