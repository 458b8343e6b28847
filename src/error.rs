use thiserror::Error;

/// Every failure the catalog can produce. All variants except `Storage` are
/// validation failures: the store's state is unchanged and the caller can
/// correct the input and retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    Invalid(String),
    #[error("Category code is already in use")]
    DuplicateCode,
    #[error("Invalid IBAN")]
    InvalidIban,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("PayPal client id is required when PayPal is enabled")]
    PaypalClientIdRequired,
    #[error("Referenced sport category does not exist")]
    CategoryNotFound,
    #[error("Referenced company does not exist")]
    CompanyNotFound,
    #[error("Invalid age range")]
    InvalidAgeRange,
    #[error("Invalid package duration")]
    InvalidDuration,
    #[error("Invalid payment settings")]
    InvalidPayment,
    #[error("Invalid enrollment selection")]
    InvalidEnrollment,
    #[error("Invalid WhatsApp account selection")]
    InvalidWhatsAppAccounts,
    #[error("Invalid additional service selection")]
    InvalidAdditionalServices,
    #[error("Invalid package groups")]
    InvalidGroups,
    #[error("Resource not found")]
    NotFound,
    #[error("Sport category is still referenced by a field or package")]
    CategoryInUse,
    #[error("Sport field is still referenced by a package group")]
    FieldInUse,
    #[error("Company is still referenced by a package")]
    CompanyInUse,
    #[error("Enrollment type is still referenced by a package")]
    EnrollmentInUse,
    #[error("Additional service is still referenced by a package")]
    ServiceInUse,
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Stable machine-readable code, one per failure class. This is what
    /// gets logged and what an embedding application maps to UI messages.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Invalid(_) => "invalid",
            CatalogError::DuplicateCode => "duplicateCode",
            CatalogError::InvalidIban => "invalidIban",
            CatalogError::InvalidEmail => "invalidEmail",
            CatalogError::PaypalClientIdRequired => "paypalClientIdRequired",
            CatalogError::CategoryNotFound => "categoryNotFound",
            CatalogError::CompanyNotFound => "companyNotFound",
            CatalogError::InvalidAgeRange => "invalidAgeRange",
            CatalogError::InvalidDuration => "invalidDuration",
            CatalogError::InvalidPayment => "invalidPayment",
            CatalogError::InvalidEnrollment => "invalidEnrollment",
            CatalogError::InvalidWhatsAppAccounts => "invalidWhatsAppAccounts",
            CatalogError::InvalidAdditionalServices => "invalidAdditionalServices",
            CatalogError::InvalidGroups => "invalidGroups",
            CatalogError::NotFound => "notFound",
            CatalogError::CategoryInUse => "categoryInUse",
            CatalogError::FieldInUse => "fieldInUse",
            CatalogError::CompanyInUse => "companyInUse",
            CatalogError::EnrollmentInUse => "enrollmentInUse",
            CatalogError::ServiceInUse => "serviceInUse",
            CatalogError::Storage(_) => "storage",
        }
    }
}
