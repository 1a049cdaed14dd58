//! Validation rules and their messages.

use super::field::{FieldKind, FieldState};

/// User-facing messages.
pub mod messages {
    pub const REQUIRED: &str = "This field is required.";
    pub const EMAIL: &str = "Entered value needs to be an email address.";
    pub const PATTERN: &str = "Please match the required format.";
    pub const SELECT: &str = "Please select an option from the list.";
    pub const CONTACT_METHOD: &str = "Please select a preferred contact method.";

    pub fn range_underflow(min: &str) -> String {
        format!("Value must be at least {min}.")
    }

    pub fn range_overflow(max: &str) -> String {
        format!("Value must be no more than {max}.")
    }
}

/// A failed check, carrying the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub rule: Rule,
    pub message: String,
}

impl ValidationFailure {
    fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// One check applied to a field. Rules that do not apply to a field pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A required field has no value.
    Required,
    /// An email field holds something that is not an address.
    EmailFormat,
    /// The value does not match a declared `pattern`.
    Pattern,
    /// A number falls outside `min`..=`max`.
    NumericRange,
    /// A select is left on its empty placeholder option.
    Selection,
}

impl Rule {
    /// Rules in the order they are tried. The first failure wins.
    pub const PRIORITY: [Rule; 5] = [
        Rule::Required,
        Rule::EmailFormat,
        Rule::Pattern,
        Rule::NumericRange,
        Rule::Selection,
    ];

    pub fn check(self, field: &FieldState) -> Result<(), ValidationFailure> {
        let validity = &field.validity;
        match self {
            Rule::Required if validity.value_missing => {
                Err(ValidationFailure::new(self, messages::REQUIRED))
            }
            Rule::EmailFormat if field.kind == FieldKind::Email && validity.type_mismatch => {
                Err(ValidationFailure::new(self, messages::EMAIL))
            }
            Rule::Pattern if field.pattern.is_some() && validity.pattern_mismatch => {
                let message = field
                    .title
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(messages::PATTERN);
                Err(ValidationFailure::new(self, message))
            }
            Rule::NumericRange if field.kind == FieldKind::Number => {
                if validity.range_underflow {
                    let min = field.min.as_deref().unwrap_or_default();
                    Err(ValidationFailure::new(self, messages::range_underflow(min)))
                } else if validity.range_overflow {
                    let max = field.max.as_deref().unwrap_or_default();
                    Err(ValidationFailure::new(self, messages::range_overflow(max)))
                } else {
                    Ok(())
                }
            }
            Rule::Selection if field.kind == FieldKind::Select && field.value.is_empty() => {
                Err(ValidationFailure::new(self, messages::SELECT))
            }
            _ => Ok(()),
        }
    }
}

/// Run every rule in priority order, stopping at the first failure.
pub fn validate(field: &FieldState) -> Result<(), ValidationFailure> {
    Rule::PRIORITY
        .iter()
        .try_for_each(|rule| rule.check(field))
}
