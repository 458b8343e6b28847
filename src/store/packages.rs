use super::payloads::{Frequency, GalleryItemInput, PackageGroupInput, PackageInput};
use super::CatalogStore;
use crate::config::DefaultSelectionPolicy;
use crate::domain::models::category::SportCategory;
use crate::domain::models::company::Company;
use crate::domain::models::enrollment::EnrollmentType;
use crate::domain::models::field::SportField;
use crate::domain::models::package::{
    EnrollmentSelection, GalleryItem, GroupSchedule, PackageDuration, PackageGroup, PackageStatus,
    PaymentSchedule, PaymentTerms, SportPackage,
};
use crate::domain::models::service::{AdditionalService, ServiceKind};
use crate::domain::models::whatsapp::WhatsAppAccount;
use crate::domain::ports::Collection;
use crate::domain::services::schedule::is_valid_time;
use crate::error::CatalogError;
use chrono::Utc;
use std::collections::HashSet;
use tracing::{info, warn};

impl CatalogStore {
    pub fn list_sport_packages(&self) -> Result<Vec<SportPackage>, CatalogError> {
        self.load(Collection::Packages)
    }

    pub fn get_sport_package(&self, id: &str) -> Result<SportPackage, CatalogError> {
        self.list_sport_packages()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn create_sport_package(&self, input: PackageInput) -> Result<SportPackage, CatalogError> {
        let mut packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        let package = self.build_package(input, None)?;
        packages.push(package.clone());
        self.commit(Collection::Packages, &packages)?;
        info!(id = %package.id, name = %package.name, "created sport package");
        Ok(package)
    }

    pub fn update_sport_package(
        &self,
        id: &str,
        input: PackageInput,
    ) -> Result<SportPackage, CatalogError> {
        let mut packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        let pos = packages
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;
        let package = self.build_package(input, Some(&packages[pos]))?;
        packages[pos] = package.clone();
        self.commit(Collection::Packages, &packages)?;
        info!(id = %package.id, "updated sport package");
        Ok(package)
    }

    pub fn remove_sport_package(&self, id: &str) -> Result<(), CatalogError> {
        let mut packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        if !packages.iter().any(|p| p.id == id) {
            return Err(CatalogError::NotFound);
        }
        packages.retain(|p| p.id != id);
        self.commit(Collection::Packages, &packages)?;
        info!(id = %id, "removed sport package");
        Ok(())
    }

    /// Validates the payload against every cross-entity invariant, in the
    /// order the data model lists them, then assembles the normalized
    /// record. Id, creation stamp and lifecycle status come from `existing`
    /// on update; a fresh package always starts as a draft.
    fn build_package(
        &self,
        input: PackageInput,
        existing: Option<&SportPackage>,
    ) -> Result<SportPackage, CatalogError> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::Invalid("name must not be empty".into()));
        }

        let categories: Vec<SportCategory> = self.load(Collection::Categories)?;
        let companies: Vec<Company> = self.load(Collection::Companies)?;
        let enrollments: Vec<EnrollmentType> = self.load(Collection::Enrollments)?;
        let accounts: Vec<WhatsAppAccount> = self.load(Collection::WhatsAppAccounts)?;
        let services: Vec<AdditionalService> = self.load(Collection::Services)?;
        let fields: Vec<SportField> = self.load(Collection::Fields)?;

        let policy = self.config().default_selection;
        let category_id = resolve_category(&input, &categories, policy)?;
        let company_id = resolve_company(&input, &companies, policy)?;
        let enrollment = resolve_enrollment(&input, &enrollments, policy)?;

        let whatsapp_account_ids = dedupe(&input.whatsapp_account_ids);
        for account_id in &whatsapp_account_ids {
            if !accounts.iter().any(|a| &a.id == account_id) {
                warn!(account_id = %account_id, "rejected package: invalidWhatsAppAccounts");
                return Err(CatalogError::InvalidWhatsAppAccounts);
            }
        }

        validate_service_selections(&input, &services)?;
        let groups = validate_groups(&input.groups, &fields, &category_id)?;
        let (age_min, age_max) = resolve_age_range(&input)?;
        let duration = resolve_duration(&input)?;
        let payment = resolve_payment(&input)?;
        let entries_count = resolve_entries_count(&input, &payment.schedule)?;
        let gallery = self.normalize_gallery(&input.gallery);

        Ok(SportPackage {
            id: existing
                .map(|p| p.id.clone())
                .unwrap_or_else(|| self.next_id()),
            name: input.name.trim().to_string(),
            description_html: input.description_html,
            category_id,
            company_id,
            enrollment,
            trainer_ids: dedupe(&input.trainer_ids),
            whatsapp_account_ids,
            fixed_services: input.fixed_services,
            variable_services: input.variable_services,
            audience: input.audience,
            age_min,
            age_max,
            duration,
            gallery,
            groups,
            payment,
            entries_count,
            training_address: input.training_address.trim().to_string(),
            user_selectable_schedule: input.user_selectable_schedule,
            featured_image: input.featured_image,
            is_featured: input.is_featured,
            is_descriptive: input.is_descriptive,
            status: existing.map(|p| p.status).unwrap_or(PackageStatus::Draft),
            created_at: existing.map(|p| p.created_at).unwrap_or_else(Utc::now),
        })
    }

    fn normalize_gallery(&self, gallery: &[GalleryItemInput]) -> Vec<GalleryItem> {
        gallery
            .iter()
            .map(|item| GalleryItem {
                id: match item.id.as_deref().map(str::trim) {
                    Some(id) if !id.is_empty() => id.to_string(),
                    _ => self.next_id(),
                },
                image: item.image.clone(),
                caption: item.caption.clone(),
            })
            .collect()
    }
}

fn resolve_category(
    input: &PackageInput,
    categories: &[SportCategory],
    policy: DefaultSelectionPolicy,
) -> Result<String, CatalogError> {
    match &input.category_id {
        Some(id) => {
            if categories.iter().any(|c| &c.id == id) {
                Ok(id.clone())
            } else {
                warn!(category_id = %id, "rejected package: categoryNotFound");
                Err(CatalogError::CategoryNotFound)
            }
        }
        None => match policy {
            DefaultSelectionPolicy::FirstAvailable => categories
                .iter()
                .min_by_key(|c| c.sort_order)
                .map(|c| c.id.clone())
                .ok_or(CatalogError::CategoryNotFound),
            DefaultSelectionPolicy::Explicit => {
                Err(CatalogError::Invalid("category_id is required".into()))
            }
        },
    }
}

fn resolve_company(
    input: &PackageInput,
    companies: &[Company],
    policy: DefaultSelectionPolicy,
) -> Result<String, CatalogError> {
    match &input.company_id {
        Some(id) => {
            if companies.iter().any(|c| &c.id == id) {
                Ok(id.clone())
            } else {
                warn!(company_id = %id, "rejected package: companyNotFound");
                Err(CatalogError::CompanyNotFound)
            }
        }
        None => match policy {
            DefaultSelectionPolicy::FirstAvailable => companies
                .first()
                .map(|c| c.id.clone())
                .ok_or(CatalogError::CompanyNotFound),
            DefaultSelectionPolicy::Explicit => {
                Err(CatalogError::Invalid("company_id is required".into()))
            }
        },
    }
}

/// The enrollment relation is optional; when set it must exist and carry a
/// non-negative price. Under first-available selection an omitted relation
/// falls back to the first enrollment type on file, priced at zero unless
/// the payload says otherwise.
fn resolve_enrollment(
    input: &PackageInput,
    enrollments: &[EnrollmentType],
    policy: DefaultSelectionPolicy,
) -> Result<Option<EnrollmentSelection>, CatalogError> {
    let type_id = match &input.enrollment_id {
        Some(id) => {
            if !enrollments.iter().any(|e| &e.id == id) {
                warn!(enrollment_id = %id, "rejected package: invalidEnrollment");
                return Err(CatalogError::InvalidEnrollment);
            }
            id.clone()
        }
        None => match policy {
            DefaultSelectionPolicy::FirstAvailable => match enrollments.first() {
                Some(enrollment) => enrollment.id.clone(),
                None => return Ok(None),
            },
            DefaultSelectionPolicy::Explicit => return Ok(None),
        },
    };

    let price = input.enrollment_price.unwrap_or(0.0);
    if !price.is_finite() || price < 0.0 {
        warn!("rejected package: invalidEnrollment (negative price)");
        return Err(CatalogError::InvalidEnrollment);
    }
    Ok(Some(EnrollmentSelection { type_id, price }))
}

/// Fixed-list ids must resolve to fixed services, variable-list ids to
/// variable ones, no id twice in a list and none shared across lists.
fn validate_service_selections(
    input: &PackageInput,
    services: &[AdditionalService],
) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (selections, expected) in [
        (&input.fixed_services, ServiceKind::Fixed),
        (&input.variable_services, ServiceKind::Variable),
    ] {
        for selection in selections.iter() {
            if !seen.insert(selection.service_id.as_str()) {
                warn!(service_id = %selection.service_id, "rejected package: invalidAdditionalServices (duplicate)");
                return Err(CatalogError::InvalidAdditionalServices);
            }
            match services.iter().find(|s| s.id == selection.service_id) {
                Some(service) if service.kind == expected => {}
                _ => {
                    warn!(service_id = %selection.service_id, "rejected package: invalidAdditionalServices");
                    return Err(CatalogError::InvalidAdditionalServices);
                }
            }
        }
    }
    Ok(())
}

fn validate_groups(
    groups: &[PackageGroupInput],
    fields: &[SportField],
    category_id: &str,
) -> Result<Vec<PackageGroup>, CatalogError> {
    let mut out = Vec::with_capacity(groups.len());
    for group in groups {
        if group.title.trim().is_empty() {
            warn!("rejected package: invalidGroups (blank title)");
            return Err(CatalogError::InvalidGroups);
        }
        if group.birth_year_min < 1900
            || group.birth_year_max > 2100
            || group.birth_year_min > group.birth_year_max
        {
            warn!("rejected package: invalidGroups (birth year range)");
            return Err(CatalogError::InvalidGroups);
        }
        // The group's field must belong to the package's own category.
        match fields.iter().find(|f| f.id == group.field_id) {
            Some(field) if field.category_id == category_id => {}
            _ => {
                warn!(field_id = %group.field_id, "rejected package: invalidGroups (field/category mismatch)");
                return Err(CatalogError::InvalidGroups);
            }
        }
        if group.schedules.is_empty() {
            warn!("rejected package: invalidGroups (no schedule)");
            return Err(CatalogError::InvalidGroups);
        }
        let mut schedules = Vec::with_capacity(group.schedules.len());
        for schedule in &group.schedules {
            if schedule.weekday > 6 || !is_valid_time(&schedule.time) {
                warn!("rejected package: invalidGroups (schedule slot)");
                return Err(CatalogError::InvalidGroups);
            }
            schedules.push(GroupSchedule {
                weekday: schedule.weekday,
                time: schedule.time.clone(),
            });
        }
        out.push(PackageGroup {
            title: group.title.trim().to_string(),
            birth_year_min: group.birth_year_min,
            birth_year_max: group.birth_year_max,
            field_id: group.field_id.clone(),
            schedules,
        });
    }
    Ok(out)
}

fn resolve_age_range(input: &PackageInput) -> Result<(u8, u8), CatalogError> {
    let (default_min, default_max) = input.audience.default_age_range();
    let age_min = input.age_min.unwrap_or(default_min);
    let age_max = input.age_max.unwrap_or(default_max);
    if age_max > 120 || age_min > age_max {
        warn!(age_min, age_max, "rejected package: invalidAgeRange");
        return Err(CatalogError::InvalidAgeRange);
    }
    Ok((age_min, age_max))
}

/// Exactly one duration shape must be populated: a single event date with a
/// time, or a start/end period. Anything else is rejected rather than
/// guessed at.
fn resolve_duration(input: &PackageInput) -> Result<PackageDuration, CatalogError> {
    let has_event = input.event_date.is_some() || input.event_time.is_some();
    let has_period = input.period_start.is_some() || input.period_end.is_some();
    if has_event == has_period {
        warn!("rejected package: invalidDuration (ambiguous shape)");
        return Err(CatalogError::InvalidDuration);
    }

    if has_event {
        let (date, time) = match (input.event_date, input.event_time.as_deref()) {
            (Some(date), Some(time)) if is_valid_time(time) => (date, time.to_string()),
            _ => {
                warn!("rejected package: invalidDuration (event)");
                return Err(CatalogError::InvalidDuration);
            }
        };
        return Ok(PackageDuration::SingleEvent { date, time });
    }

    match (input.period_start, input.period_end) {
        (Some(start), Some(end)) if start <= end => Ok(PackageDuration::Period { start, end }),
        _ => {
            warn!("rejected package: invalidDuration (period)");
            Err(CatalogError::InvalidDuration)
        }
    }
}

/// Price must always be non-negative. A recurring package needs a frequency;
/// monthly and weekly frequencies need their due-day fields, and every
/// field that does not apply to the chosen frequency is dropped by
/// construction of the tagged schedule.
fn resolve_payment(input: &PackageInput) -> Result<PaymentTerms, CatalogError> {
    if !input.price_amount.is_finite() || input.price_amount < 0.0 {
        warn!("rejected package: invalidPayment (price)");
        return Err(CatalogError::InvalidPayment);
    }

    let schedule = if !input.recurring {
        PaymentSchedule::OneOff
    } else {
        match input.frequency {
            Some(Frequency::Daily) => PaymentSchedule::Daily,
            Some(Frequency::Yearly) => PaymentSchedule::Yearly,
            Some(Frequency::Weekly) => match input.weekly_due_weekday {
                Some(due_weekday) if due_weekday <= 6 => PaymentSchedule::Weekly { due_weekday },
                _ => {
                    warn!("rejected package: invalidPayment (weekly due weekday)");
                    return Err(CatalogError::InvalidPayment);
                }
            },
            Some(Frequency::Monthly) => {
                let due_day = input.monthly_due_day;
                let open_day = input.monthly_next_cycle_open_day;
                match (due_day, open_day) {
                    (Some(due_day), Some(open_day))
                        if (1..=31).contains(&due_day) && (1..=31).contains(&open_day) =>
                    {
                        PaymentSchedule::Monthly {
                            due_day,
                            next_cycle_open_day: open_day,
                        }
                    }
                    _ => {
                        warn!("rejected package: invalidPayment (monthly days)");
                        return Err(CatalogError::InvalidPayment);
                    }
                }
            }
            None => {
                warn!("rejected package: invalidPayment (missing frequency)");
                return Err(CatalogError::InvalidPayment);
            }
        }
    };

    Ok(PaymentTerms {
        price_amount: input.price_amount,
        schedule,
    })
}

/// Daily billing has no meaningful entry budget, so the count is nulled.
/// Every other schedule requires a positive count, capped by the schedule's
/// period length where one exists.
fn resolve_entries_count(
    input: &PackageInput,
    schedule: &PaymentSchedule,
) -> Result<Option<u32>, CatalogError> {
    if matches!(schedule, PaymentSchedule::Daily) {
        return Ok(None);
    }
    match input.entries_count {
        Some(count) if count >= 1 => {
            if let Some(cap) = schedule.entries_cap() {
                if count > cap {
                    warn!(count, cap, "rejected package: invalidPayment (entries over cap)");
                    return Err(CatalogError::InvalidPayment);
                }
            }
            Ok(Some(count))
        }
        _ => {
            warn!("rejected package: invalidPayment (entries count)");
            Err(CatalogError::InvalidPayment)
        }
    }
}

fn dedupe(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
