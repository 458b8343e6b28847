use super::payloads::WhatsAppAccountInput;
use super::CatalogStore;
use crate::domain::models::package::SportPackage;
use crate::domain::models::whatsapp::{Availability, ButtonStyle, WhatsAppAccount};
use crate::domain::ports::Collection;
use crate::domain::services::phone::{is_valid_phone, normalize_phone};
use crate::domain::services::schedule::is_valid_time;
use crate::error::CatalogError;
use chrono::Utc;
use tracing::{info, warn};

impl CatalogStore {
    pub fn list_whatsapp_accounts(&self) -> Result<Vec<WhatsAppAccount>, CatalogError> {
        self.load(Collection::WhatsAppAccounts)
    }

    pub fn get_whatsapp_account(&self, id: &str) -> Result<WhatsAppAccount, CatalogError> {
        self.list_whatsapp_accounts()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn create_whatsapp_account(
        &self,
        input: WhatsAppAccountInput,
    ) -> Result<WhatsAppAccount, CatalogError> {
        let normalized = normalize_account(&input)?;
        let mut accounts: Vec<WhatsAppAccount> = self.load(Collection::WhatsAppAccounts)?;
        let account = WhatsAppAccount {
            id: self.next_id(),
            created_at: Utc::now(),
            ..normalized
        };
        accounts.push(account.clone());
        self.commit(Collection::WhatsAppAccounts, &accounts)?;
        info!(id = %account.id, phone = %account.phone, "created whatsapp account");
        Ok(account)
    }

    pub fn update_whatsapp_account(
        &self,
        id: &str,
        input: WhatsAppAccountInput,
    ) -> Result<WhatsAppAccount, CatalogError> {
        let normalized = normalize_account(&input)?;
        let mut accounts: Vec<WhatsAppAccount> = self.load(Collection::WhatsAppAccounts)?;
        let pos = accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(CatalogError::NotFound)?;
        let updated = WhatsAppAccount {
            id: accounts[pos].id.clone(),
            created_at: accounts[pos].created_at,
            ..normalized
        };
        accounts[pos] = updated.clone();
        self.commit(Collection::WhatsAppAccounts, &accounts)?;
        info!(id = %updated.id, "updated whatsapp account");
        Ok(updated)
    }

    /// Removal never blocks: packages referencing the account get the
    /// reference stripped and stay otherwise untouched.
    pub fn remove_whatsapp_account(&self, id: &str) -> Result<(), CatalogError> {
        let mut accounts: Vec<WhatsAppAccount> = self.load(Collection::WhatsAppAccounts)?;
        if !accounts.iter().any(|a| a.id == id) {
            return Err(CatalogError::NotFound);
        }
        accounts.retain(|a| a.id != id);
        self.save(Collection::WhatsAppAccounts, &accounts)?;

        let mut packages: Vec<SportPackage> = self.load(Collection::Packages)?;
        let mut cascaded = false;
        for package in &mut packages {
            let before = package.whatsapp_account_ids.len();
            package.whatsapp_account_ids.retain(|a| a != id);
            if package.whatsapp_account_ids.len() != before {
                cascaded = true;
            }
        }
        if cascaded {
            self.save(Collection::Packages, &packages)?;
        }

        self.notify(Collection::WhatsAppAccounts);
        if cascaded {
            self.notify(Collection::Packages);
        }
        info!(id = %id, cascaded = cascaded, "removed whatsapp account");
        Ok(())
    }
}

fn normalize_account(input: &WhatsAppAccountInput) -> Result<WhatsAppAccount, CatalogError> {
    if input.title.trim().is_empty() {
        return Err(CatalogError::Invalid("title must not be empty".into()));
    }
    let phone = normalize_phone(&input.phone);
    if !is_valid_phone(&phone) {
        warn!("rejected whatsapp account: invalid phone number");
        return Err(CatalogError::Invalid(
            "phone number must have 7 to 15 digits".into(),
        ));
    }

    let availability = match &input.availability {
        Availability::Always => Availability::Always,
        Availability::Slots { slots } => {
            for slot in slots {
                if slot.weekday > 6 {
                    return Err(CatalogError::Invalid(
                        "availability weekday must be between 0 and 6".into(),
                    ));
                }
                if !is_valid_time(&slot.start) || !is_valid_time(&slot.end) {
                    return Err(CatalogError::Invalid(
                        "availability times must be HH:MM".into(),
                    ));
                }
                // Canonical zero-padded "HH:MM" compares chronologically as
                // a string.
                if slot.start >= slot.end {
                    return Err(CatalogError::Invalid(
                        "availability slot must start before it ends".into(),
                    ));
                }
            }
            Availability::Slots {
                slots: slots.clone(),
            }
        }
    };

    let defaults = ButtonStyle::default();
    let button = ButtonStyle {
        label: non_blank_or(&input.button_label, &defaults.label),
        background_color: non_blank_or(&input.button_background_color, &defaults.background_color),
        text_color: non_blank_or(&input.button_text_color, &defaults.text_color),
    };

    Ok(WhatsAppAccount {
        id: String::new(),
        title: input.title.trim().to_string(),
        phone,
        avatar: input.avatar.clone(),
        active: input.active,
        availability,
        offline_message: input.offline_message.clone(),
        button,
        created_at: Utc::now(),
    })
}

fn non_blank_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
