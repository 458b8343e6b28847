//! Typed input payloads, one per entity. Payloads carry user-settable fields
//! only: ids, `created_at` and package status are never accepted from the
//! outside. Unknown JSON keys are rejected at the parse boundary, before any
//! business-rule validation runs.

use crate::domain::models::package::{Audience, ServiceSelection};
use crate::domain::models::service::ServiceKind;
use crate::domain::models::whatsapp::Availability;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryInput {
    pub code: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldInput {
    pub title: String,
    pub category_id: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyInput {
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
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrollmentTypeInput {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdditionalServiceInput {
    pub title: String,
    pub description: String,
    pub kind: ServiceKind,
    pub price: Option<f64>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhatsAppAccountInput {
    pub title: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub active: bool,
    pub availability: Availability,
    pub offline_message: String,
    /// Button style overrides; blanks fall back to the defaults.
    pub button_label: Option<String>,
    pub button_background_color: Option<String>,
    pub button_text_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryItemInput {
    /// Kept when re-submitting an existing item; issued when absent.
    pub id: Option<String>,
    pub image: String,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupScheduleInput {
    pub weekday: u8,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageGroupInput {
    pub title: String,
    pub birth_year_min: u16,
    pub birth_year_max: u16,
    pub field_id: String,
    pub schedules: Vec<GroupScheduleInput>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// The package payload is flat where the stored model is tagged: duration
/// and payment sub-fields arrive as loose optionals and normalization
/// resolves them into exactly one shape, dropping whatever does not apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageInput {
    pub name: String,
    pub description_html: String,
    pub category_id: Option<String>,
    pub company_id: Option<String>,
    pub enrollment_id: Option<String>,
    pub enrollment_price: Option<f64>,
    pub trainer_ids: Vec<String>,
    pub whatsapp_account_ids: Vec<String>,
    pub fixed_services: Vec<ServiceSelection>,
    pub variable_services: Vec<ServiceSelection>,
    pub audience: Audience,
    pub age_min: Option<u8>,
    pub age_max: Option<u8>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<String>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub gallery: Vec<GalleryItemInput>,
    pub groups: Vec<PackageGroupInput>,
    pub price_amount: f64,
    pub recurring: bool,
    pub frequency: Option<Frequency>,
    pub weekly_due_weekday: Option<u8>,
    pub monthly_due_day: Option<u8>,
    pub monthly_next_cycle_open_day: Option<u8>,
    pub entries_count: Option<u32>,
    pub training_address: String,
    pub user_selectable_schedule: bool,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub is_descriptive: bool,
}
