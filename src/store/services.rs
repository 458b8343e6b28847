use super::payloads::AdditionalServiceInput;
use super::CatalogStore;
use crate::domain::models::package::SportPackage;
use crate::domain::models::service::{AdditionalService, ServiceKind};
use crate::domain::ports::Collection;
use crate::error::CatalogError;
use chrono::Utc;
use tracing::{info, warn};

impl CatalogStore {
    pub fn list_additional_services(&self) -> Result<Vec<AdditionalService>, CatalogError> {
        self.load(Collection::Services)
    }

    pub fn get_additional_service(&self, id: &str) -> Result<AdditionalService, CatalogError> {
        self.list_additional_services()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn create_additional_service(
        &self,
        input: AdditionalServiceInput,
    ) -> Result<AdditionalService, CatalogError> {
        let price = normalized_price(&input)?;
        let mut services: Vec<AdditionalService> = self.load(Collection::Services)?;
        let service = AdditionalService {
            id: self.next_id(),
            title: input.title.trim().to_string(),
            description: input.description,
            kind: input.kind,
            price,
            active: input.active,
            created_at: Utc::now(),
        };
        services.push(service.clone());
        self.commit(Collection::Services, &services)?;
        info!(id = %service.id, kind = ?service.kind, "created additional service");
        Ok(service)
    }

    pub fn update_additional_service(
        &self,
        id: &str,
        input: AdditionalServiceInput,
    ) -> Result<AdditionalService, CatalogError> {
        let price = normalized_price(&input)?;
        let mut services: Vec<AdditionalService> = self.load(Collection::Services)?;
        let pos = services
            .iter()
            .position(|s| s.id == id)
            .ok_or(CatalogError::NotFound)?;
        let updated = AdditionalService {
            id: services[pos].id.clone(),
            title: input.title.trim().to_string(),
            description: input.description,
            kind: input.kind,
            price,
            active: input.active,
            created_at: services[pos].created_at,
        };
        services[pos] = updated.clone();
        self.commit(Collection::Services, &services)?;
        info!(id = %updated.id, "updated additional service");
        Ok(updated)
    }

    /// Deletion is blocked while any package offers the service.
    pub fn remove_additional_service(&self, id: &str) -> Result<(), CatalogError> {
        let mut services: Vec<AdditionalService> = self.load(Collection::Services)?;
        if !services.iter().any(|s| s.id == id) {
            return Err(CatalogError::NotFound);
        }
        let packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        let in_use = packages.iter().any(|p| {
            p.fixed_services.iter().any(|s| s.service_id == id)
                || p.variable_services.iter().any(|s| s.service_id == id)
        });
        if in_use {
            warn!(id = %id, "rejected service removal: serviceInUse");
            return Err(CatalogError::ServiceInUse);
        }
        services.retain(|s| s.id != id);
        self.commit(Collection::Services, &services)?;
        info!(id = %id, "removed additional service");
        Ok(())
    }
}

/// Fixed services require a non-negative price; variable ones are priced
/// elsewhere, so any supplied price is dropped rather than stored.
fn normalized_price(input: &AdditionalServiceInput) -> Result<Option<f64>, CatalogError> {
    if input.title.trim().is_empty() {
        return Err(CatalogError::Invalid("title must not be empty".into()));
    }
    match input.kind {
        ServiceKind::Fixed => match input.price {
            Some(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
            _ => Err(CatalogError::Invalid(
                "fixed services require a non-negative price".into(),
            )),
        },
        ServiceKind::Variable => Ok(None),
    }
}
