#![allow(dead_code)]

use academy_catalog::config::{Config, DefaultSelectionPolicy};
use academy_catalog::domain::models::category::SportCategory;
use academy_catalog::domain::models::company::Company;
use academy_catalog::domain::models::enrollment::EnrollmentType;
use academy_catalog::domain::models::field::SportField;
use academy_catalog::domain::models::service::{AdditionalService, ServiceKind};
use academy_catalog::domain::models::whatsapp::{Availability, WhatsAppAccount};
use academy_catalog::domain::ports::{ChangeListener, Collection};
use academy_catalog::infra::ids::UuidIdGenerator;
use academy_catalog::infra::storage::memory::MemoryStorage;
use academy_catalog::store::payloads::{
    AdditionalServiceInput, CategoryInput, CompanyInput, EnrollmentTypeInput, FieldInput,
    PackageInput, WhatsAppAccountInput,
};
use academy_catalog::store::CatalogStore;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

/// Collects the signals broadcast by the store, in order.
pub struct RecordingListener {
    signals: Mutex<Vec<&'static str>>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            signals: Mutex::new(Vec::new()),
        })
    }

    pub fn take(&self) -> Vec<&'static str> {
        std::mem::take(&mut self.signals.lock().unwrap())
    }
}

impl ChangeListener for RecordingListener {
    fn on_change(&self, collection: Collection) {
        self.signals.lock().unwrap().push(collection.signal());
    }
}

pub struct TestStore {
    pub store: CatalogStore,
    pub signals: Arc<RecordingListener>,
    pub listener_token: u64,
}

impl TestStore {
    pub fn new() -> Self {
        Self::with_policy(DefaultSelectionPolicy::Explicit)
    }

    pub fn with_policy(policy: DefaultSelectionPolicy) -> Self {
        let mut config = Config::in_memory();
        config.default_selection = policy;
        let store = CatalogStore::new(
            config,
            Arc::new(MemoryStorage::new()),
            Arc::new(UuidIdGenerator),
        );
        let signals = RecordingListener::new();
        let listener_token = store.subscribe(signals.clone());
        Self {
            store,
            signals,
            listener_token,
        }
    }

    pub fn seed_category(&self, code: &str) -> SportCategory {
        self.store
            .create_sport_category(category_input(code))
            .expect("seed category")
    }

    pub fn seed_field(&self, category_id: &str) -> SportField {
        self.store
            .create_sport_field(field_input(category_id))
            .expect("seed field")
    }

    pub fn seed_company(&self) -> Company {
        self.store
            .create_company(company_input())
            .expect("seed company")
    }

    pub fn seed_enrollment(&self) -> EnrollmentType {
        self.store
            .create_enrollment_type(enrollment_input())
            .expect("seed enrollment type")
    }

    pub fn seed_service(&self, kind: ServiceKind, price: Option<f64>) -> AdditionalService {
        self.store
            .create_additional_service(service_input(kind, price))
            .expect("seed additional service")
    }

    pub fn seed_whatsapp(&self) -> WhatsAppAccount {
        self.store
            .create_whatsapp_account(whatsapp_input("+39 333 123 4567"))
            .expect("seed whatsapp account")
    }
}

pub fn category_input(code: &str) -> CategoryInput {
    CategoryInput {
        code: code.to_string(),
        label: format!("Label for {code}"),
        icon: "ball".to_string(),
        active: true,
        sort_order: 0,
    }
}

pub fn field_input(category_id: &str) -> FieldInput {
    FieldInput {
        title: "Campo A".to_string(),
        category_id: category_id.to_string(),
        description: "Synthetic turf, floodlit".to_string(),
    }
}

pub fn company_input() -> CompanyInput {
    CompanyInput {
        title: "ASD Sporting Club".to_string(),
        address: "Via Roma 1, La Spezia".to_string(),
        place_id: "place-123".to_string(),
        vat_number: "IT01234567890".to_string(),
        iban: "IT60 X054 2811 1010 0000 0123 456".to_string(),
        paypal_enabled: false,
        paypal_client_id: None,
        email: "info@sportingclub.it".to_string(),
        terms_html: "<p>Terms and conditions.</p>".to_string(),
        privacy_html: "<p>Privacy policy.</p>".to_string(),
        medical_consent_html: "<p>Medical consent.</p>".to_string(),
        media_consent_html: "<p>Media consent.</p>".to_string(),
    }
}

pub fn enrollment_input() -> EnrollmentTypeInput {
    EnrollmentTypeInput {
        title: "Annual membership".to_string(),
        description: "Season card, insurance included".to_string(),
    }
}

pub fn service_input(kind: ServiceKind, price: Option<f64>) -> AdditionalServiceInput {
    AdditionalServiceInput {
        title: "Training kit".to_string(),
        description: "Shirt, shorts and socks".to_string(),
        kind,
        price,
        active: true,
    }
}

pub fn whatsapp_input(phone: &str) -> WhatsAppAccountInput {
    WhatsAppAccountInput {
        title: "Front desk".to_string(),
        phone: phone.to_string(),
        avatar: None,
        active: true,
        availability: Availability::Always,
        offline_message: "We answer during office hours.".to_string(),
        button_label: None,
        button_background_color: None,
        button_text_color: None,
    }
}

/// A valid one-off package over a season period, without groups or
/// service selections. Tests tweak single fields from here.
pub fn package_input(category_id: &str, company_id: &str) -> PackageInput {
    PackageInput {
        name: "Youth Football".to_string(),
        description_html: "<p>Two sessions per week.</p>".to_string(),
        category_id: Some(category_id.to_string()),
        company_id: Some(company_id.to_string()),
        enrollment_id: None,
        enrollment_price: None,
        trainer_ids: vec![],
        whatsapp_account_ids: vec![],
        fixed_services: vec![],
        variable_services: vec![],
        audience: academy_catalog::domain::models::package::Audience::Youth,
        age_min: Some(6),
        age_max: Some(12),
        event_date: None,
        event_time: None,
        period_start: NaiveDate::from_ymd_opt(2026, 9, 1),
        period_end: NaiveDate::from_ymd_opt(2027, 6, 15),
        gallery: vec![],
        groups: vec![],
        price_amount: 350.0,
        recurring: false,
        frequency: None,
        weekly_due_weekday: None,
        monthly_due_day: None,
        monthly_next_cycle_open_day: None,
        entries_count: Some(60),
        training_address: "Via dei Campi 3".to_string(),
        user_selectable_schedule: false,
        featured_image: None,
        is_featured: false,
        is_descriptive: false,
    }
}
