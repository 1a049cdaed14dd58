//! The form validator component.

use formdom::{Document, Element, Event, EventKind, EventOutcome, Tag};

use super::field::{FieldKind, FieldState};
use super::result::{FieldError, ValidationResult};
use super::rules::{ValidationFailure, messages, validate};
use super::slot::ErrorSlots;
use crate::config::ValidatorConfig;
use crate::error::BindError;

/// An event registration made at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub target: String,
    pub kind: EventKind,
}

/// Validates one form's fields on blur, input and submit.
///
/// The validator holds field ids, not elements: every handler takes the
/// document it was bound to and reads the current state from it.
///
/// # Example
///
/// ```ignore
/// let validator = FormValidator::bind(&mut doc, ValidatorConfig::default())?;
///
/// doc.set_value("age", "12")?;
/// validator.dispatch(&mut doc, &Event::blur("age"));
/// assert_eq!(doc.text_of("error-age"), Some("Value must be at least 18."));
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
    config: ValidatorConfig,
    fields: Vec<String>,
    listeners: Vec<Listener>,
}

impl FormValidator {
    /// Bind to the form named by `config.form_id`.
    ///
    /// Turns off native validation UI on the form (`novalidate`), collects
    /// every `input`, `select` and `textarea` inside it, and registers a blur
    /// and input listener per field plus a submit listener on the form.
    pub fn bind(doc: &mut Document, config: ValidatorConfig) -> Result<Self, BindError> {
        let form = doc
            .get_mut(&config.form_id)
            .ok_or_else(|| BindError::FormNotFound {
                form_id: config.form_id.clone(),
            })?;
        if form.tag != Tag::Form {
            return Err(BindError::NotAForm {
                id: form.id.clone(),
                tag: format!("{:?}", form.tag).to_lowercase(),
            });
        }
        form.set_attr("novalidate", "");

        let fields: Vec<String> = doc
            .descendants_of(&config.form_id, Element::is_control)
            .into_iter()
            .map(|el| el.id.clone())
            .collect();

        let mut listeners = Vec::with_capacity(fields.len() * 2 + 1);
        for id in &fields {
            for kind in [EventKind::Blur, EventKind::Input] {
                listeners.push(Listener {
                    target: id.clone(),
                    kind,
                });
            }
        }
        listeners.push(Listener {
            target: config.form_id.clone(),
            kind: EventKind::Submit,
        });

        log::debug!(
            "bound validator to form '{}' ({} fields)",
            config.form_id,
            fields.len()
        );

        Ok(Self {
            config,
            fields,
            listeners,
        })
    }

    pub fn form_id(&self) -> &str {
        &self.config.form_id
    }

    /// Ids of the collected fields, in document order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn is_listening(&self, event: &Event) -> bool {
        self.listeners
            .iter()
            .any(|l| l.kind == event.kind() && l.target == event.target())
    }

    fn slots(&self) -> ErrorSlots<'_> {
        ErrorSlots::new(&self.config)
    }

    /// Validate one field and update its error display.
    ///
    /// The previous message is cleared first, so at most one message (from
    /// the first failing rule) is ever shown. Returns true if the field passes.
    pub fn validate_field(&self, doc: &mut Document, id: &str) -> bool {
        self.check_field(doc, id).is_ok()
    }

    fn check_field(&self, doc: &mut Document, id: &str) -> Result<(), ValidationFailure> {
        let slots = self.slots();
        slots.clear(doc, id);

        let Some(state) = FieldState::capture(doc, id) else {
            log::warn!("field '{id}' is no longer in the document");
            return Ok(());
        };

        match validate(&state) {
            Ok(()) => Ok(()),
            Err(failure) => {
                log::debug!("field '{id}' failed {:?}: {}", failure.rule, failure.message);
                slots.show(doc, id, &failure.message);
                Err(failure)
            }
        }
    }

    /// Re-validate a field that lost focus. Radios and checkboxes are skipped.
    pub fn handle_blur(&self, doc: &mut Document, id: &str) {
        let Some(el) = doc.get(id) else { return };
        if FieldKind::of(el).is_toggle() {
            return;
        }
        self.validate_field(doc, id);
    }

    /// Clear a field's error as soon as its native validity is satisfied.
    ///
    /// Only the built-in constraint flags are consulted; the custom rules are
    /// left for the next blur or submit.
    pub fn handle_input(&self, doc: &mut Document, id: &str) {
        if doc.validity(id).is_some_and(|v| v.valid()) {
            self.slots().clear(doc, id);
        }
    }

    /// Validate every field and the radio group.
    ///
    /// Every field is checked even after one fails, so all messages appear at
    /// once. Errors are returned in document order, with the radio group last.
    pub fn handle_submit(&self, doc: &mut Document) -> ValidationResult {
        let slots = self.slots();
        let mut errors = Vec::new();

        for id in &self.fields {
            let skip = doc
                .get(id)
                .is_none_or(|el| FieldKind::of(el).is_toggle());
            if skip {
                continue;
            }
            if let Err(failure) = self.check_field(doc, id) {
                errors.push(FieldError {
                    field: id.clone(),
                    slot: slots.slot_id(id),
                    message: failure.message,
                });
            }
        }

        if let Some(group) = &self.config.radio_group {
            let (present, checked) = {
                let members = doc.radio_members(&self.config.form_id, group);
                (!members.is_empty(), members.iter().any(|r| r.checked))
            };
            if present && !checked {
                slots.show_group(doc, group, messages::CONTACT_METHOD);
                errors.push(FieldError {
                    field: group.clone(),
                    slot: slots.slot_id(group),
                    message: messages::CONTACT_METHOD.to_string(),
                });
            } else {
                slots.clear_group(doc, group);
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Route an event to the matching listener.
    ///
    /// Events for targets the validator did not register on are ignored. A
    /// submit that fails validation is prevented.
    pub fn dispatch(&self, doc: &mut Document, event: &Event) -> EventOutcome {
        if !self.is_listening(event) {
            log::debug!("no {} listener on '{}'", event.kind(), event.target());
            return EventOutcome::Proceed;
        }

        match event {
            Event::Blur { target } => self.handle_blur(doc, target),
            Event::Input { target } => self.handle_input(doc, target),
            Event::Submit { .. } => {
                let result = self.handle_submit(doc);
                if result.is_invalid() {
                    log::debug!(
                        "submit of '{}' prevented: {} error(s)",
                        self.form_id(),
                        result.errors().len()
                    );
                    return EventOutcome::Prevented;
                }
            }
        }
        EventOutcome::Proceed
    }

    /// Messages currently shown in the form, as `(field, message)` pairs in
    /// document order with the radio group last.
    pub fn visible_errors(&self, doc: &Document) -> Vec<(String, String)> {
        let slots = self.slots();
        self.fields
            .iter()
            .filter_map(|id| slots.text(doc, id).map(|text| (id.clone(), text)))
            .chain(
                self.config
                    .radio_group
                    .iter()
                    .filter_map(|group| slots.text(doc, group).map(|text| (group.clone(), text))),
            )
            .collect()
    }
}
