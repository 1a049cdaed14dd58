//! Error types for binding and configuration.
//!
//! Validation failures are not errors; they are reported through
//! [`ValidationResult`](crate::validation::ValidationResult).

use std::path::PathBuf;

use thiserror::Error;

/// Error binding a validator to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("form '{form_id}' not found in document")]
    FormNotFound { form_id: String },

    #[error("element '{id}' is a <{tag}>, not a <form>")]
    NotAForm { id: String, tag: String },
}

/// Error loading a validator config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
