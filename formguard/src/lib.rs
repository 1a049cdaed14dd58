pub mod config;
pub mod error;
pub mod validation;

pub use config::ValidatorConfig;
pub use error::{BindError, ConfigError};
pub use validation::{FieldError, FormValidator, ValidationResult};

pub mod prelude {
    pub use crate::config::ValidatorConfig;
    pub use crate::error::BindError;
    pub use crate::validation::{
        FieldError, FieldKind, FieldState, FormValidator, Rule, ValidationFailure,
        ValidationResult,
    };

    pub use formdom::{Document, Element, Event, EventOutcome, InputType};
}
