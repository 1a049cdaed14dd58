//! Event scripts for `formguard replay`.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "input": { "target": "email", "value": "ada@" } },
//!   { "blur": "email" },
//!   { "check": { "target": "contactEmail" } },
//!   "submit"
//! ]
//! ```

use std::fmt;

use formdom::{Document, DocumentError, Event, EventOutcome};
use formguard::FormValidator;
use serde::Deserialize;

fn checked_default() -> bool {
    true
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Move focus away from a field.
    Blur(String),
    /// Type a new value into a field.
    Input { target: String, value: String },
    /// Check or uncheck a checkbox or radio.
    Check {
        target: String,
        #[serde(default = "checked_default")]
        checked: bool,
    },
    /// Submit the bound form.
    Submit,
}

impl Step {
    /// Apply the step to the document, then fire the matching event.
    pub fn apply(
        &self,
        doc: &mut Document,
        validator: &FormValidator,
    ) -> Result<EventOutcome, DocumentError> {
        let event = match self {
            Step::Blur(target) => Event::blur(target.as_str()),
            Step::Input { target, value } => {
                doc.set_value(target, value)?;
                Event::input(target.as_str())
            }
            Step::Check { target, checked } => {
                doc.set_checked(target, *checked)?;
                Event::input(target.as_str())
            }
            Step::Submit => Event::submit(validator.form_id()),
        };
        Ok(validator.dispatch(doc, &event))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Blur(target) => write!(f, "blur {target}"),
            Step::Input { target, value } => write!(f, "input {target} = {value:?}"),
            Step::Check { target, checked } => {
                let verb = if *checked { "check" } else { "uncheck" };
                write!(f, "{verb} {target}")
            }
            Step::Submit => write!(f, "submit"),
        }
    }
}
