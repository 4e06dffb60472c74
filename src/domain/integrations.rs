//! Third-party system integrations (TMS, ERP, GPS).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationType {
    Tms,
    Erp,
    Gps,
    Other,
}

impl IntegrationType {
    pub const ALL: [IntegrationType; 4] = [
        IntegrationType::Tms,
        IntegrationType::Erp,
        IntegrationType::Gps,
        IntegrationType::Other,
    ];

    /// Unknown types are shown as `Other`.
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw.trim()))
            .unwrap_or(IntegrationType::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationType::Tms => "tms",
            IntegrationType::Erp => "erp",
            IntegrationType::Gps => "gps",
            IntegrationType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntegrationType::Tms => "Transport Management System",
            IntegrationType::Erp => "ERP System",
            IntegrationType::Gps => "GPS Tracking",
            IntegrationType::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            IntegrationType::Tms => "🚛",
            IntegrationType::Erp => "📦",
            IntegrationType::Gps => "🧭",
            IntegrationType::Other => "🔌",
        }
    }
}

/// Obfuscates an API key for storage. This is encoding, not encryption.
pub fn encode_api_key(raw: &str) -> String {
    STANDARD.encode(raw.as_bytes())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntegrationForm {
    pub integration_type: String,
    pub integration_name: String,
    pub api_endpoint: String,
    pub api_key: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntegrationFormError {
    #[error("Integration name is required")]
    MissingName,
    #[error("Select an integration type")]
    MissingType,
}

/// Row inserted into the `api_integrations` collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewIntegration {
    pub user_id: Uuid,
    pub integration_type: String,
    pub integration_name: String,
    pub api_endpoint: String,
    pub api_key_encrypted: String,
    pub is_active: bool,
}

impl NewIntegration {
    pub fn from_form(user_id: Uuid, form: &IntegrationForm) -> Result<Self, IntegrationFormError> {
        if form.integration_type.trim().is_empty() {
            return Err(IntegrationFormError::MissingType);
        }
        if form.integration_name.trim().is_empty() {
            return Err(IntegrationFormError::MissingName);
        }
        Ok(Self {
            user_id,
            integration_type: IntegrationType::parse(&form.integration_type)
                .as_str()
                .to_string(),
            integration_name: form.integration_name.trim().to_string(),
            api_endpoint: form.api_endpoint.trim().to_string(),
            api_key_encrypted: encode_api_key(&form.api_key),
            is_active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_base64_encoded() {
        assert_eq!(encode_api_key("secret"), "c2VjcmV0");
        assert_eq!(encode_api_key(""), "");
    }

    #[test]
    fn unknown_type_becomes_other() {
        assert_eq!(IntegrationType::parse("TMS"), IntegrationType::Tms);
        assert_eq!(IntegrationType::parse("crm"), IntegrationType::Other);
    }

    #[test]
    fn new_integrations_start_active() {
        let form = IntegrationForm {
            integration_type: "gps".into(),
            integration_name: " Fleet tracker ".into(),
            api_endpoint: "https://gps.example.com/v1".into(),
            api_key: "k".into(),
        };
        let row = NewIntegration::from_form(Uuid::nil(), &form).expect("valid form");
        assert!(row.is_active);
        assert_eq!(row.integration_type, "gps");
        assert_eq!(row.integration_name, "Fleet tracker");
        assert_eq!(row.api_key_encrypted, "aw==");
    }

    #[test]
    fn type_is_required() {
        let form = IntegrationForm {
            integration_name: "x".into(),
            ..IntegrationForm::default()
        };
        assert_eq!(
            NewIntegration::from_form(Uuid::nil(), &form),
            Err(IntegrationFormError::MissingType)
        );
    }
}
