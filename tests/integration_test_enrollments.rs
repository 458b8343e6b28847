mod common;

use academy_catalog::error::CatalogError;
use common::{enrollment_input, package_input, TestStore};

#[test]
fn test_create_requires_title() {
    let app = TestStore::new();
    let mut input = enrollment_input();
    input.title = " ".to_string();
    let err = app.store.create_enrollment_type(input).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
}

#[test]
fn test_update_keeps_identity() {
    let app = TestStore::new();
    let enrollment = app.seed_enrollment();
    let mut input = enrollment_input();
    input.title = "Trial month".to_string();
    let updated = app
        .store
        .update_enrollment_type(&enrollment.id, input)
        .unwrap();
    assert_eq!(updated.id, enrollment.id);
    assert_eq!(updated.title, "Trial month");
    assert_eq!(updated.created_at, enrollment.created_at);
}

#[test]
fn test_remove_blocked_while_referenced_by_package() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let enrollment = app.seed_enrollment();

    let mut input = package_input(&category.id, &company.id);
    input.enrollment_id = Some(enrollment.id.clone());
    input.enrollment_price = Some(50.0);
    app.store.create_sport_package(input).unwrap();

    let err = app
        .store
        .remove_enrollment_type(&enrollment.id)
        .unwrap_err();
    assert_eq!(err, CatalogError::EnrollmentInUse);
}

#[test]
fn test_remove_unreferenced_enrollment_type() {
    let app = TestStore::new();
    let enrollment = app.seed_enrollment();
    app.store.remove_enrollment_type(&enrollment.id).unwrap();
    assert!(app.store.list_enrollment_types().unwrap().is_empty());
    assert_eq!(
        app.store.get_enrollment_type(&enrollment.id).unwrap_err(),
        CatalogError::NotFound
    );
}
