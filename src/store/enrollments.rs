use super::payloads::EnrollmentTypeInput;
use super::CatalogStore;
use crate::domain::models::enrollment::EnrollmentType;
use crate::domain::models::package::SportPackage;
use crate::domain::ports::Collection;
use crate::error::CatalogError;
use chrono::Utc;
use tracing::{info, warn};

impl CatalogStore {
    pub fn list_enrollment_types(&self) -> Result<Vec<EnrollmentType>, CatalogError> {
        self.load(Collection::Enrollments)
    }

    pub fn get_enrollment_type(&self, id: &str) -> Result<EnrollmentType, CatalogError> {
        self.list_enrollment_types()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn create_enrollment_type(
        &self,
        input: EnrollmentTypeInput,
    ) -> Result<EnrollmentType, CatalogError> {
        validate_enrollment_type(&input)?;
        let mut enrollments: Vec<EnrollmentType> = self.load(Collection::Enrollments)?;
        let enrollment = EnrollmentType {
            id: self.next_id(),
            title: input.title.trim().to_string(),
            description: input.description,
            created_at: Utc::now(),
        };
        enrollments.push(enrollment.clone());
        self.commit(Collection::Enrollments, &enrollments)?;
        info!(id = %enrollment.id, "created enrollment type");
        Ok(enrollment)
    }

    pub fn update_enrollment_type(
        &self,
        id: &str,
        input: EnrollmentTypeInput,
    ) -> Result<EnrollmentType, CatalogError> {
        validate_enrollment_type(&input)?;
        let mut enrollments: Vec<EnrollmentType> = self.load(Collection::Enrollments)?;
        let pos = enrollments
            .iter()
            .position(|e| e.id == id)
            .ok_or(CatalogError::NotFound)?;
        let updated = EnrollmentType {
            id: enrollments[pos].id.clone(),
            title: input.title.trim().to_string(),
            description: input.description,
            created_at: enrollments[pos].created_at,
        };
        enrollments[pos] = updated.clone();
        self.commit(Collection::Enrollments, &enrollments)?;
        info!(id = %updated.id, "updated enrollment type");
        Ok(updated)
    }

    /// Deletion is blocked while any package enrolls through this type.
    pub fn remove_enrollment_type(&self, id: &str) -> Result<(), CatalogError> {
        let mut enrollments: Vec<EnrollmentType> = self.load(Collection::Enrollments)?;
        if !enrollments.iter().any(|e| e.id == id) {
            return Err(CatalogError::NotFound);
        }
        let packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        let in_use = packages
            .iter()
            .any(|p| p.enrollment.as_ref().is_some_and(|e| e.type_id == id));
        if in_use {
            warn!(id = %id, "rejected enrollment type removal: enrollmentInUse");
            return Err(CatalogError::EnrollmentInUse);
        }
        enrollments.retain(|e| e.id != id);
        self.commit(Collection::Enrollments, &enrollments)?;
        info!(id = %id, "removed enrollment type");
        Ok(())
    }
}

fn validate_enrollment_type(input: &EnrollmentTypeInput) -> Result<(), CatalogError> {
    if input.title.trim().is_empty() {
        return Err(CatalogError::Invalid("title must not be empty".into()));
    }
    Ok(())
}
