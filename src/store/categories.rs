use super::payloads::CategoryInput;
use super::CatalogStore;
use crate::domain::models::category::SportCategory;
use crate::domain::models::field::SportField;
use crate::domain::models::package::SportPackage;
use crate::domain::ports::Collection;
use crate::domain::services::slug::slugify;
use crate::error::CatalogError;
use chrono::Utc;
use tracing::{info, warn};

impl CatalogStore {
    pub fn list_sport_categories(&self) -> Result<Vec<SportCategory>, CatalogError> {
        let mut categories: Vec<SportCategory> = self.load(Collection::Categories)?;
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }

    pub fn get_sport_category(&self, id: &str) -> Result<SportCategory, CatalogError> {
        self.list_sport_categories()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn create_sport_category(
        &self,
        input: CategoryInput,
    ) -> Result<SportCategory, CatalogError> {
        let code = normalized_code(&input)?;
        let mut categories: Vec<SportCategory> = self.load(Collection::Categories)?;
        if categories.iter().any(|c| c.code == code) {
            warn!(code = %code, "rejected category: duplicateCode");
            return Err(CatalogError::DuplicateCode);
        }

        let category = SportCategory {
            id: self.next_id(),
            code,
            label: input.label.trim().to_string(),
            icon: input.icon.trim().to_string(),
            active: input.active,
            sort_order: input.sort_order,
            created_at: Utc::now(),
        };
        categories.push(category.clone());
        self.commit(Collection::Categories, &categories)?;
        info!(id = %category.id, code = %category.code, "created sport category");
        Ok(category)
    }

    pub fn update_sport_category(
        &self,
        id: &str,
        input: CategoryInput,
    ) -> Result<SportCategory, CatalogError> {
        let code = normalized_code(&input)?;
        let mut categories: Vec<SportCategory> = self.load(Collection::Categories)?;
        let pos = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(CatalogError::NotFound)?;
        if categories.iter().any(|c| c.id != id && c.code == code) {
            warn!(code = %code, "rejected category: duplicateCode");
            return Err(CatalogError::DuplicateCode);
        }

        let updated = SportCategory {
            id: categories[pos].id.clone(),
            code,
            label: input.label.trim().to_string(),
            icon: input.icon.trim().to_string(),
            active: input.active,
            sort_order: input.sort_order,
            created_at: categories[pos].created_at,
        };
        categories[pos] = updated.clone();
        self.commit(Collection::Categories, &categories)?;
        info!(id = %updated.id, "updated sport category");
        Ok(updated)
    }

    /// Deletion is blocked while any field or package still references the
    /// category.
    pub fn remove_sport_category(&self, id: &str) -> Result<(), CatalogError> {
        let mut categories: Vec<SportCategory> = self.load(Collection::Categories)?;
        if !categories.iter().any(|c| c.id == id) {
            return Err(CatalogError::NotFound);
        }

        let fields: Vec<SportField> = self.load(Collection::Fields)?;
        if fields.iter().any(|f| f.category_id == id) {
            warn!(id = %id, "rejected category removal: categoryInUse");
            return Err(CatalogError::CategoryInUse);
        }
        let packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        if packages.iter().any(|p| p.category_id == id) {
            warn!(id = %id, "rejected category removal: categoryInUse");
            return Err(CatalogError::CategoryInUse);
        }

        categories.retain(|c| c.id != id);
        self.commit(Collection::Categories, &categories)?;
        info!(id = %id, "removed sport category");
        Ok(())
    }
}

fn normalized_code(input: &CategoryInput) -> Result<String, CatalogError> {
    if input.label.trim().is_empty() {
        return Err(CatalogError::Invalid("label must not be empty".into()));
    }
    let code = slugify(&input.code);
    if code.is_empty() {
        return Err(CatalogError::Invalid(
            "code must contain at least one alphanumeric character".into(),
        ));
    }
    Ok(code)
}
