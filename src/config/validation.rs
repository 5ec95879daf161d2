//! Configuration validation for packmatch.

use super::types::{AppConfig, MatchingConfig, OutputConfig, VendorConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Vendor ids are non-empty runs of ASCII digits.
pub(crate) fn is_vendor_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.vendors.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for VendorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (name, id) in &self.aliases {
            if name.trim().is_empty() {
                errors.push(ConfigError::new("vendors.aliases", "Vendor name must not be empty"));
            }
            if name.contains(':') {
                errors.push(ConfigError::new(
                    format!("vendors.aliases.{name}"),
                    "Vendor name must not contain ':'",
                ));
            }
            if !is_vendor_id(id) {
                errors.push(ConfigError::new(
                    format!("vendors.aliases.{name}"),
                    format!("Vendor id must be decimal digits, got '{id}'"),
                ));
            }
        }

        for (id, name) in &self.names {
            if !is_vendor_id(id) {
                errors.push(ConfigError::new(
                    format!("vendors.names.{id}"),
                    format!("Vendor id must be decimal digits, got '{id}'"),
                ));
            }
            if name.trim().is_empty() {
                errors.push(ConfigError::new(
                    format!("vendors.names.{id}"),
                    "Vendor name must not be empty",
                ));
            }
        }

        for (old, new) in &self.legacy_ids {
            let field = format!("vendors.legacy_ids.{old}");
            if !is_vendor_id(old) || !is_vendor_id(new) {
                errors.push(ConfigError::new(
                    field,
                    format!("Vendor ids must be decimal digits, got '{old}' -> '{new}'"),
                ));
            } else if old == new {
                errors.push(ConfigError::new(field, "Legacy id must differ from its target"));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_vendor_alias_validation() {
        let config = AppConfig::builder()
            .vendor_alias("Acme", "12a")
            .vendor_alias("Bad:Name", "1")
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "vendors.aliases.Acme"));
        assert!(errors.iter().any(|e| e.message.contains("':'")));
    }

    #[test]
    fn test_vendor_names_validation() {
        let config = AppConfig::builder().vendor_name("x", " ").build();
        assert_eq!(config.vendors.validate().len(), 2);
    }

    #[test]
    fn test_legacy_id_validation() {
        let config = AppConfig::builder()
            .legacy_vendor_id("5", "5")
            .legacy_vendor_id("old", "7")
            .build();
        let errors = config.vendors.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.to_string() == "vendors.legacy_ids.5: Legacy id must differ from its target"));
    }

    #[test]
    fn test_is_vendor_id() {
        assert!(is_vendor_id("0"));
        assert!(is_vendor_id("114"));
        assert!(!is_vendor_id(""));
        assert!(!is_vendor_id("-1"));
    }
}
