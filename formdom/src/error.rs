//! Document error types

/// Error type for mutating a `Document`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// No element carries the requested id.
    #[error("Element '{id}' not found in document")]
    NotFound { id: String },

    /// The element exists but is not a form control.
    #[error("Element '{id}' is not a form control")]
    NotAControl { id: String },

    /// A `select` has no option with the requested value.
    #[error("Select '{id}' has no option with value '{value}'")]
    NoSuchOption { id: String, value: String },
}

impl DocumentError {
    /// Creates a new not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a new not-a-control error.
    pub fn not_a_control(id: impl Into<String>) -> Self {
        Self::NotAControl { id: id.into() }
    }
}
