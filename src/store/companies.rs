use super::payloads::CompanyInput;
use super::CatalogStore;
use crate::domain::models::company::Company;
use crate::domain::models::package::SportPackage;
use crate::domain::ports::Collection;
use crate::domain::services::iban::{is_valid_iban, normalize_iban};
use crate::domain::services::text::{has_visible_text, is_valid_email};
use crate::error::CatalogError;
use chrono::Utc;
use tracing::{info, warn};

impl CatalogStore {
    pub fn list_companies(&self) -> Result<Vec<Company>, CatalogError> {
        self.load(Collection::Companies)
    }

    pub fn get_company(&self, id: &str) -> Result<Company, CatalogError> {
        self.list_companies()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn create_company(&self, input: CompanyInput) -> Result<Company, CatalogError> {
        let normalized = normalize_company(&input)?;
        let mut companies: Vec<Company> = self.load(Collection::Companies)?;
        let company = Company {
            id: self.next_id(),
            created_at: Utc::now(),
            ..normalized
        };
        companies.push(company.clone());
        self.commit(Collection::Companies, &companies)?;
        info!(id = %company.id, title = %company.title, "created company");
        Ok(company)
    }

    pub fn update_company(&self, id: &str, input: CompanyInput) -> Result<Company, CatalogError> {
        let normalized = normalize_company(&input)?;
        let mut companies: Vec<Company> = self.load(Collection::Companies)?;
        let pos = companies
            .iter()
            .position(|c| c.id == id)
            .ok_or(CatalogError::NotFound)?;
        let updated = Company {
            id: companies[pos].id.clone(),
            created_at: companies[pos].created_at,
            ..normalized
        };
        companies[pos] = updated.clone();
        self.commit(Collection::Companies, &companies)?;
        info!(id = %updated.id, "updated company");
        Ok(updated)
    }

    /// Deletion is blocked while any package sells under the company.
    pub fn remove_company(&self, id: &str) -> Result<(), CatalogError> {
        let mut companies: Vec<Company> = self.load(Collection::Companies)?;
        if !companies.iter().any(|c| c.id == id) {
            return Err(CatalogError::NotFound);
        }
        let packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        if packages.iter().any(|p| p.company_id == id) {
            warn!(id = %id, "rejected company removal: companyInUse");
            return Err(CatalogError::CompanyInUse);
        }
        companies.retain(|c| c.id != id);
        self.commit(Collection::Companies, &companies)?;
        info!(id = %id, "removed company");
        Ok(())
    }
}

/// Validates in order: structure, IBAN, email, PayPal coupling, consent
/// texts. Returns the record with normalized billing coordinates; id and
/// creation stamp are filled by the caller.
fn normalize_company(input: &CompanyInput) -> Result<Company, CatalogError> {
    if input.title.trim().is_empty() {
        return Err(CatalogError::Invalid("title must not be empty".into()));
    }

    let iban = normalize_iban(&input.iban);
    if !is_valid_iban(&iban) {
        warn!("rejected company: invalidIban");
        return Err(CatalogError::InvalidIban);
    }
    if !is_valid_email(&input.email) {
        warn!("rejected company: invalidEmail");
        return Err(CatalogError::InvalidEmail);
    }

    let paypal_client_id = if input.paypal_enabled {
        match input.paypal_client_id.as_deref().map(str::trim) {
            Some(client_id) if !client_id.is_empty() => Some(client_id.to_string()),
            _ => {
                warn!("rejected company: paypalClientIdRequired");
                return Err(CatalogError::PaypalClientIdRequired);
            }
        }
    } else {
        // Disabled integrations carry no stale credentials.
        None
    };

    for (name, html) in [
        ("terms_html", &input.terms_html),
        ("privacy_html", &input.privacy_html),
        ("medical_consent_html", &input.medical_consent_html),
        ("media_consent_html", &input.media_consent_html),
    ] {
        if !has_visible_text(html) {
            return Err(CatalogError::Invalid(format!(
                "{name} must contain visible text"
            )));
        }
    }

    Ok(Company {
        id: String::new(),
        title: input.title.trim().to_string(),
        address: input.address.trim().to_string(),
        place_id: input.place_id.trim().to_string(),
        vat_number: input.vat_number.trim().to_string(),
        iban,
        paypal_enabled: input.paypal_enabled,
        paypal_client_id,
        email: input.email.trim().to_string(),
        terms_html: input.terms_html.clone(),
        privacy_html: input.privacy_html.clone(),
        medical_consent_html: input.medical_consent_html.clone(),
        media_consent_html: input.media_consent_html.clone(),
        created_at: Utc::now(),
    })
}
