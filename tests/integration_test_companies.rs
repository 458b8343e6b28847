mod common;

use academy_catalog::error::CatalogError;
use common::{company_input, package_input, TestStore};

#[test]
fn test_create_normalizes_iban() {
    let app = TestStore::new();
    let company = app.store.create_company(company_input()).unwrap();
    assert_eq!(company.iban, "IT60X0542811101000000123456");
    assert_eq!(app.signals.take(), vec!["companies_changed"]);
}

#[test]
fn test_invalid_iban_rejected() {
    let app = TestStore::new();
    let mut input = company_input();
    // One digit off IT60X0542811101000000123456.
    input.iban = "IT61X0542811101000000123456".to_string();
    let err = app.store.create_company(input).unwrap_err();
    assert_eq!(err, CatalogError::InvalidIban);
    assert!(app.store.list_companies().unwrap().is_empty());
}

#[test]
fn test_invalid_email_rejected() {
    let app = TestStore::new();
    let mut input = company_input();
    input.email = "not-an-email".to_string();
    let err = app.store.create_company(input).unwrap_err();
    assert_eq!(err, CatalogError::InvalidEmail);
}

#[test]
fn test_paypal_client_id_required_iff_enabled() {
    let app = TestStore::new();

    let mut input = company_input();
    input.paypal_enabled = true;
    input.paypal_client_id = None;
    let err = app.store.create_company(input).unwrap_err();
    assert_eq!(err, CatalogError::PaypalClientIdRequired);

    let mut input = company_input();
    input.paypal_enabled = true;
    input.paypal_client_id = Some("client-abc".to_string());
    let company = app.store.create_company(input).unwrap();
    assert_eq!(company.paypal_client_id.as_deref(), Some("client-abc"));

    // Disabling the integration drops the stored credential.
    let mut input = company_input();
    input.paypal_enabled = false;
    input.paypal_client_id = Some("stale".to_string());
    let updated = app.store.update_company(&company.id, input).unwrap();
    assert_eq!(updated.paypal_client_id, None);
}

#[test]
fn test_consent_texts_must_have_visible_content() {
    let app = TestStore::new();
    let mut input = company_input();
    input.medical_consent_html = "<p>&nbsp; </p>".to_string();
    let err = app.store.create_company(input).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
}

#[test]
fn test_remove_blocked_while_referenced_by_package() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    app.store
        .create_sport_package(package_input(&category.id, &company.id))
        .unwrap();

    let err = app.store.remove_company(&company.id).unwrap_err();
    assert_eq!(err, CatalogError::CompanyInUse);
    assert_eq!(app.store.list_companies().unwrap().len(), 1);
}

#[test]
fn test_remove_unreferenced_company() {
    let app = TestStore::new();
    let company = app.seed_company();
    app.store.remove_company(&company.id).unwrap();
    assert_eq!(
        app.store.get_company(&company.id).unwrap_err(),
        CatalogError::NotFound
    );
}
