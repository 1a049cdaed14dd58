//! Validator configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Naming conventions shared between the validator and the page markup.
///
/// Every field is optional in TOML; omitted fields keep their defaults.
///
/// ```toml
/// form_id = "signupForm"
/// radio_group = "contactMethod"
/// error_prefix = "error-"
/// error_class = "input-error"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Id of the form to bind to.
    pub form_id: String,

    /// Name of the radio group that must have a member checked on submit.
    /// `None` disables the group check.
    pub radio_group: Option<String>,

    /// Prefix joined to a field id to find its error slot.
    pub error_prefix: String,

    /// Class added to a field while it shows an error.
    pub error_class: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            form_id: "registrationForm".to_string(),
            radio_group: Some("contactMethod".to_string()),
            error_prefix: "error-".to_string(),
            error_class: "input-error".to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create a config for the form with the given id.
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            ..Default::default()
        }
    }

    /// Set the required radio group.
    pub fn radio_group(mut self, name: impl Into<String>) -> Self {
        self.radio_group = Some(name.into());
        self
    }

    /// Disable the radio group check.
    pub fn without_radio_group(mut self) -> Self {
        self.radio_group = None;
        self
    }

    pub fn error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Id of the error slot paired with `field_id`.
    pub fn slot_id(&self, field_id: &str) -> String {
        format!("{}{}", self.error_prefix, field_id)
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
