mod common;

use academy_catalog::config::DefaultSelectionPolicy;
use academy_catalog::domain::models::package::{
    PackageDuration, PackageStatus, ServiceSelection,
};
use academy_catalog::domain::models::service::ServiceKind;
use academy_catalog::error::CatalogError;
use academy_catalog::store::payloads::{GroupScheduleInput, PackageGroupInput};
use chrono::NaiveDate;
use common::{package_input, TestStore};

#[test]
fn test_create_starts_as_draft() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let package = app
        .store
        .create_sport_package(package_input(&category.id, &company.id))
        .unwrap();
    assert_eq!(package.status, PackageStatus::Draft);
    assert_eq!(app.signals.take().last(), Some(&"sport_packages_changed"));
}

#[test]
fn test_unknown_references_rejected() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();

    let err = app
        .store
        .create_sport_package(package_input("ghost", &company.id))
        .unwrap_err();
    assert_eq!(err, CatalogError::CategoryNotFound);

    let err = app
        .store
        .create_sport_package(package_input(&category.id, "ghost"))
        .unwrap_err();
    assert_eq!(err, CatalogError::CompanyNotFound);

    let mut input = package_input(&category.id, &company.id);
    input.whatsapp_account_ids = vec!["ghost".to_string()];
    let err = app.store.create_sport_package(input).unwrap_err();
    assert_eq!(err, CatalogError::InvalidWhatsAppAccounts);

    assert!(app.store.list_sport_packages().unwrap().is_empty());
}

#[test]
fn test_enrollment_must_exist_with_non_negative_price() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let enrollment = app.seed_enrollment();

    let mut input = package_input(&category.id, &company.id);
    input.enrollment_id = Some("ghost".to_string());
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidEnrollment
    );

    let mut input = package_input(&category.id, &company.id);
    input.enrollment_id = Some(enrollment.id.clone());
    input.enrollment_price = Some(-10.0);
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidEnrollment
    );

    let mut input = package_input(&category.id, &company.id);
    input.enrollment_id = Some(enrollment.id.clone());
    input.enrollment_price = Some(120.0);
    let package = app.store.create_sport_package(input).unwrap();
    let selection = package.enrollment.unwrap();
    assert_eq!(selection.type_id, enrollment.id);
    assert_eq!(selection.price, 120.0);
}

#[test]
fn test_service_id_in_both_lists_rejected() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let fixed = app.seed_service(ServiceKind::Fixed, Some(30.0));

    let mut input = package_input(&category.id, &company.id);
    input.fixed_services = vec![ServiceSelection {
        service_id: fixed.id.clone(),
        is_active: true,
    }];
    input.variable_services = vec![ServiceSelection {
        service_id: fixed.id.clone(),
        is_active: false,
    }];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidAdditionalServices
    );
}

#[test]
fn test_service_kind_must_match_list() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let variable = app.seed_service(ServiceKind::Variable, None);

    // A variable service in the fixed list.
    let mut input = package_input(&category.id, &company.id);
    input.fixed_services = vec![ServiceSelection {
        service_id: variable.id.clone(),
        is_active: true,
    }];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidAdditionalServices
    );

    let mut input = package_input(&category.id, &company.id);
    input.variable_services = vec![ServiceSelection {
        service_id: variable.id.clone(),
        is_active: true,
    }];
    app.store.create_sport_package(input).unwrap();
}

#[test]
fn test_duplicate_within_one_list_rejected() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let fixed = app.seed_service(ServiceKind::Fixed, Some(30.0));

    let mut input = package_input(&category.id, &company.id);
    input.fixed_services = vec![
        ServiceSelection {
            service_id: fixed.id.clone(),
            is_active: true,
        },
        ServiceSelection {
            service_id: fixed.id.clone(),
            is_active: false,
        },
    ];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidAdditionalServices
    );
}

fn group(field_id: &str) -> PackageGroupInput {
    PackageGroupInput {
        title: "Under 12".to_string(),
        birth_year_min: 2014,
        birth_year_max: 2016,
        field_id: field_id.to_string(),
        schedules: vec![GroupScheduleInput {
            weekday: 2,
            time: "17:00".to_string(),
        }],
    }
}

#[test]
fn test_group_field_must_match_package_category() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let other = app.seed_category("nuoto");
    let company = app.seed_company();
    let foreign_field = app.seed_field(&other.id);

    let mut input = package_input(&category.id, &company.id);
    input.groups = vec![group(&foreign_field.id)];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidGroups
    );
}

#[test]
fn test_group_requires_schedule_and_sane_birth_years() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let field = app.seed_field(&category.id);

    let mut input = package_input(&category.id, &company.id);
    let mut g = group(&field.id);
    g.schedules.clear();
    input.groups = vec![g];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidGroups
    );

    let mut input = package_input(&category.id, &company.id);
    let mut g = group(&field.id);
    g.birth_year_min = 2016;
    g.birth_year_max = 2014;
    input.groups = vec![g];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidGroups
    );

    let mut input = package_input(&category.id, &company.id);
    let mut g = group(&field.id);
    g.birth_year_min = 1800;
    input.groups = vec![g];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidGroups
    );

    let mut input = package_input(&category.id, &company.id);
    input.groups = vec![group(&field.id)];
    let package = app.store.create_sport_package(input).unwrap();
    assert_eq!(package.groups.len(), 1);
}

#[test]
fn test_group_schedule_time_must_be_zero_padded() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let field = app.seed_field(&category.id);

    // Unpadded times must never be stored: "9:30" would render as a
    // distinct time from "09:30" and sort after "18:00" in the schedule
    // lines.
    let mut input = package_input(&category.id, &company.id);
    let mut g = group(&field.id);
    g.schedules[0].time = "9:30".to_string();
    input.groups = vec![g];
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidGroups
    );

    let mut input = package_input(&category.id, &company.id);
    let mut g = group(&field.id);
    g.schedules[0].time = "09:30".to_string();
    input.groups = vec![g];
    let package = app.store.create_sport_package(input).unwrap();
    assert_eq!(package.groups[0].schedules[0].time, "09:30");
}

#[test]
fn test_age_range_validation_and_audience_defaults() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();

    let mut input = package_input(&category.id, &company.id);
    input.age_min = Some(14);
    input.age_max = Some(10);
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidAgeRange
    );

    let mut input = package_input(&category.id, &company.id);
    input.age_max = Some(130);
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidAgeRange
    );

    // Omitted bounds come from the audience.
    let mut input = package_input(&category.id, &company.id);
    input.age_min = None;
    input.age_max = None;
    let package = app.store.create_sport_package(input).unwrap();
    assert_eq!((package.age_min, package.age_max), (0, 17));
}

#[test]
fn test_duration_exactly_one_shape() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();

    // Both shapes at once.
    let mut input = package_input(&category.id, &company.id);
    input.event_date = NaiveDate::from_ymd_opt(2026, 10, 4);
    input.event_time = Some("15:00".to_string());
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidDuration
    );

    // Neither shape.
    let mut input = package_input(&category.id, &company.id);
    input.period_start = None;
    input.period_end = None;
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidDuration
    );

    // Period out of order.
    let mut input = package_input(&category.id, &company.id);
    input.period_start = NaiveDate::from_ymd_opt(2027, 6, 15);
    input.period_end = NaiveDate::from_ymd_opt(2026, 9, 1);
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidDuration
    );

    // Event without a time.
    let mut input = package_input(&category.id, &company.id);
    input.period_start = None;
    input.period_end = None;
    input.event_date = NaiveDate::from_ymd_opt(2026, 10, 4);
    assert_eq!(
        app.store.create_sport_package(input).unwrap_err(),
        CatalogError::InvalidDuration
    );

    // A well-formed single event.
    let mut input = package_input(&category.id, &company.id);
    input.period_start = None;
    input.period_end = None;
    input.event_date = NaiveDate::from_ymd_opt(2026, 10, 4);
    input.event_time = Some("15:00".to_string());
    let package = app.store.create_sport_package(input).unwrap();
    assert_eq!(
        package.duration,
        PackageDuration::SingleEvent {
            date: NaiveDate::from_ymd_opt(2026, 10, 4).unwrap(),
            time: "15:00".to_string(),
        }
    );
}

#[test]
fn test_update_keeps_id_status_and_created_at() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let package = app
        .store
        .create_sport_package(package_input(&category.id, &company.id))
        .unwrap();

    let mut input = package_input(&category.id, &company.id);
    input.name = "Renamed".to_string();
    let updated = app.store.update_sport_package(&package.id, input).unwrap();
    assert_eq!(updated.id, package.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.status, package.status);
    assert_eq!(updated.created_at, package.created_at);
}

#[test]
fn test_trainer_and_whatsapp_ids_deduplicated() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let account = app.seed_whatsapp();

    let mut input = package_input(&category.id, &company.id);
    input.trainer_ids = vec!["t1".to_string(), "t2".to_string(), "t1".to_string()];
    input.whatsapp_account_ids = vec![account.id.clone(), account.id.clone()];
    let package = app.store.create_sport_package(input).unwrap();
    assert_eq!(package.trainer_ids, vec!["t1", "t2"]);
    assert_eq!(package.whatsapp_account_ids, vec![account.id]);
}

#[test]
fn test_gallery_items_get_ids() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();

    let mut input = package_input(&category.id, &company.id);
    input.gallery = vec![
        academy_catalog::store::payloads::GalleryItemInput {
            id: None,
            image: "pitch.jpg".to_string(),
            caption: "Main pitch".to_string(),
        },
        academy_catalog::store::payloads::GalleryItemInput {
            id: Some("existing-id".to_string()),
            image: "locker.jpg".to_string(),
            caption: "Locker room".to_string(),
        },
    ];
    let package = app.store.create_sport_package(input).unwrap();
    assert!(!package.gallery[0].id.is_empty());
    assert_eq!(package.gallery[1].id, "existing-id");
}

#[test]
fn test_first_available_policy_fills_omitted_relations() {
    let app = TestStore::with_policy(DefaultSelectionPolicy::FirstAvailable);
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let enrollment = app.seed_enrollment();

    let mut input = package_input("unused", "unused");
    input.category_id = None;
    input.company_id = None;
    input.enrollment_id = None;
    let package = app.store.create_sport_package(input).unwrap();
    assert_eq!(package.category_id, category.id);
    assert_eq!(package.company_id, company.id);
    assert_eq!(package.enrollment.unwrap().type_id, enrollment.id);
}

#[test]
fn test_explicit_policy_requires_relations() {
    let app = TestStore::new();
    app.seed_category("calcio");
    app.seed_company();

    let mut input = package_input("unused", "unused");
    input.category_id = None;
    input.company_id = None;
    let err = app.store.create_sport_package(input).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
}

#[test]
fn test_schedule_lines_rendered_with_store_locale() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let field = app.seed_field(&category.id);

    let mut input = package_input(&category.id, &company.id);
    let mut g = group(&field.id);
    g.schedules = vec![
        GroupScheduleInput {
            weekday: 3,
            time: "17:00".to_string(),
        },
        GroupScheduleInput {
            weekday: 1,
            time: "17:00".to_string(),
        },
    ];
    input.groups = vec![g];
    let package = app.store.create_sport_package(input).unwrap();

    let lines = app.store.schedule_lines(&package.groups[0].schedules);
    assert_eq!(lines, vec!["Monday and Wednesday at 17:00"]);
}

#[test]
fn test_remove_package() {
    let app = TestStore::new();
    let category = app.seed_category("calcio");
    let company = app.seed_company();
    let package = app
        .store
        .create_sport_package(package_input(&category.id, &company.id))
        .unwrap();
    app.store.remove_sport_package(&package.id).unwrap();
    assert!(app.store.list_sport_packages().unwrap().is_empty());
    assert_eq!(
        app.store.remove_sport_package(&package.id).unwrap_err(),
        CatalogError::NotFound
    );
}
