//! Form validation for formguard.
//!
//! This module binds a [`FormValidator`] to a form in a [`formdom::Document`]
//! and keeps each field's inline error message in step with its input.
//!
//! # Example
//!
//! ```ignore
//! use formguard::prelude::*;
//!
//! let mut doc = Document::new(page);
//! let validator = FormValidator::bind(&mut doc, ValidatorConfig::default())?;
//!
//! validator.dispatch(&mut doc, &Event::blur("email"));
//!
//! let outcome = validator.dispatch(&mut doc, &Event::submit("registrationForm"));
//! if outcome.is_prevented() {
//!     // Errors are now visible next to each failing field.
//! }
//! ```

mod field;
mod result;
mod rules;
mod slot;
mod validator;

pub use field::{FieldKind, FieldState};
pub use result::{FieldError, ValidationResult};
pub use rules::{Rule, ValidationFailure, messages, validate};
pub use validator::{FormValidator, Listener};
