use super::payloads::FieldInput;
use super::CatalogStore;
use crate::domain::models::category::SportCategory;
use crate::domain::models::field::SportField;
use crate::domain::models::package::SportPackage;
use crate::domain::ports::Collection;
use crate::error::CatalogError;
use chrono::Utc;
use tracing::{info, warn};

impl CatalogStore {
    pub fn list_sport_fields(&self) -> Result<Vec<SportField>, CatalogError> {
        self.load(Collection::Fields)
    }

    pub fn get_sport_field(&self, id: &str) -> Result<SportField, CatalogError> {
        self.list_sport_fields()?
            .into_iter()
            .find(|f| f.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn create_sport_field(&self, input: FieldInput) -> Result<SportField, CatalogError> {
        self.validate_field(&input)?;
        let mut fields: Vec<SportField> = self.load(Collection::Fields)?;
        let field = SportField {
            id: self.next_id(),
            title: input.title.trim().to_string(),
            category_id: input.category_id,
            description: input.description,
            created_at: Utc::now(),
        };
        fields.push(field.clone());
        self.commit(Collection::Fields, &fields)?;
        info!(id = %field.id, category_id = %field.category_id, "created sport field");
        Ok(field)
    }

    pub fn update_sport_field(
        &self,
        id: &str,
        input: FieldInput,
    ) -> Result<SportField, CatalogError> {
        self.validate_field(&input)?;
        let mut fields: Vec<SportField> = self.load(Collection::Fields)?;
        let pos = fields
            .iter()
            .position(|f| f.id == id)
            .ok_or(CatalogError::NotFound)?;
        let updated = SportField {
            id: fields[pos].id.clone(),
            title: input.title.trim().to_string(),
            category_id: input.category_id,
            description: input.description,
            created_at: fields[pos].created_at,
        };
        fields[pos] = updated.clone();
        self.commit(Collection::Fields, &fields)?;
        info!(id = %updated.id, "updated sport field");
        Ok(updated)
    }

    /// Deletion is blocked while any package group trains on the field.
    pub fn remove_sport_field(&self, id: &str) -> Result<(), CatalogError> {
        let mut fields: Vec<SportField> = self.load(Collection::Fields)?;
        if !fields.iter().any(|f| f.id == id) {
            return Err(CatalogError::NotFound);
        }

        let packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        let in_use = packages
            .iter()
            .any(|p| p.groups.iter().any(|g| g.field_id == id));
        if in_use {
            warn!(id = %id, "rejected field removal: fieldInUse");
            return Err(CatalogError::FieldInUse);
        }

        fields.retain(|f| f.id != id);
        self.commit(Collection::Fields, &fields)?;
        info!(id = %id, "removed sport field");
        Ok(())
    }

    fn validate_field(&self, input: &FieldInput) -> Result<(), CatalogError> {
        if input.title.trim().is_empty() {
            return Err(CatalogError::Invalid("title must not be empty".into()));
        }
        let categories: Vec<SportCategory> = self.load(Collection::Categories)?;
        if !categories.iter().any(|c| c.id == input.category_id) {
            warn!(category_id = %input.category_id, "rejected field: categoryNotFound");
            return Err(CatalogError::CategoryNotFound);
        }
        Ok(())
    }
}
