use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Flat fee, priced in the catalog.
    Fixed,
    /// Priced outside the catalog (e.g. per session); carries no price here.
    Variable,
}

/// An optional paid add-on a package can offer (kit, insurance, transport).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdditionalService {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ServiceKind,
    /// Set and non-negative for `Fixed`, always `None` for `Variable`.
    pub price: Option<f64>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
