use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Adult,
    Youth,
}

impl Audience {
    /// Age bounds applied when a payload omits its own.
    pub fn default_age_range(self) -> (u8, u8) {
        match self {
            Audience::Adult => (18, 120),
            Audience::Youth => (0, 17),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    Draft,
    Published,
    Archived,
}

/// Exactly one shape is ever stored; the flat payload fields for the other
/// shape are dropped during normalization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PackageDuration {
    SingleEvent { date: NaiveDate, time: String },
    Period { start: NaiveDate, end: NaiveDate },
}

/// Billing mode. Sub-fields exist only for the frequencies that need them;
/// anything else a payload supplies is dropped, not stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "frequency", rename_all = "snake_case")]
pub enum PaymentSchedule {
    OneOff,
    Daily,
    Weekly { due_weekday: u8 },
    Monthly { due_day: u8, next_cycle_open_day: u8 },
    Yearly,
}

impl PaymentSchedule {
    pub fn is_recurring(&self) -> bool {
        !matches!(self, PaymentSchedule::OneOff)
    }

    /// Upper bound for `entries_count`, when one applies.
    pub fn entries_cap(&self) -> Option<u32> {
        match self {
            PaymentSchedule::Weekly { .. } => Some(7),
            PaymentSchedule::Monthly { .. } => Some(31),
            PaymentSchedule::Yearly => Some(365),
            PaymentSchedule::OneOff | PaymentSchedule::Daily => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaymentTerms {
    pub price_amount: f64,
    pub schedule: PaymentSchedule,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnrollmentSelection {
    pub type_id: String,
    pub price: f64,
}

/// One picked add-on inside a package's fixed or variable list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServiceSelection {
    pub service_id: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub image: String,
    pub caption: String,
}

/// Weekly recurring slot of a group. Weekday 0 is Sunday, time is "HH:MM".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroupSchedule {
    pub weekday: u8,
    pub time: String,
}

/// An age-bracketed training cohort inside a package, with its own field
/// and weekly schedule. The field must belong to the package's category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PackageGroup {
    pub title: String,
    pub birth_year_min: u16,
    pub birth_year_max: u16,
    pub field_id: String,
    pub schedules: Vec<GroupSchedule>,
}

/// The central aggregate: a sellable sports program bundling schedule,
/// pricing and associated resources.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SportPackage {
    pub id: String,
    pub name: String,
    pub description_html: String,
    pub category_id: String,
    pub company_id: String,
    pub enrollment: Option<EnrollmentSelection>,
    /// Opaque user ids from the directory collaborator; not validated here.
    pub trainer_ids: Vec<String>,
    pub whatsapp_account_ids: Vec<String>,
    pub fixed_services: Vec<ServiceSelection>,
    pub variable_services: Vec<ServiceSelection>,
    pub audience: Audience,
    pub age_min: u8,
    pub age_max: u8,
    pub duration: PackageDuration,
    pub gallery: Vec<GalleryItem>,
    pub groups: Vec<PackageGroup>,
    pub payment: PaymentTerms,
    /// `None` only when the payment schedule is daily.
    pub entries_count: Option<u32>,
    pub training_address: String,
    pub user_selectable_schedule: bool,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub is_descriptive: bool,
    /// Set to `Draft` on create and never advanced by this crate; an
    /// external workflow owns the transitions.
    pub status: PackageStatus,
    pub created_at: DateTime<Utc>,
}
