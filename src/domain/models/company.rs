use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The legal entity selling packages. Carries the billing coordinates (VAT,
/// IBAN, optional PayPal) and the four consent texts shown at enrollment.
/// Consent fields hold HTML and must contain visible text once tags are
/// stripped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Company {
    pub id: String,
    pub title: String,
    pub address: String,
    pub place_id: String,
    pub vat_number: String,
    pub iban: String,
    pub paypal_enabled: bool,
    pub paypal_client_id: Option<String>,
    pub email: String,
    pub terms_html: String,
    pub privacy_html: String,
    pub medical_consent_html: String,
    pub media_consent_html: String,
    pub created_at: DateTime<Utc>,
}
