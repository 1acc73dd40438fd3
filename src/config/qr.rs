//! QR code configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Where printed QR codes send diners.
#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    /// Base URL of the diner-facing frontend; `/request?...` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl QrConfig {
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        let absolute = url.starts_with("http://") || url.starts_with("https://");
        if !absolute || url.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidQrBaseUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::QrBaseUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_in_development() {
        assert!(QrConfig::default().validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let config = QrConfig {
            base_url: "/request".to_string(),
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidQrBaseUrl)
        );
    }

    #[test]
    fn test_production_requires_https() {
        assert_eq!(
            QrConfig::default().validate(&Environment::Production),
            Err(ValidationError::QrBaseUrlMustBeHttps)
        );
    }
}
