//! Field snapshots taken from the document.

use formdom::{Document, Element, InputType, Tag, ValidityState};

/// The closed set of control kinds the rules distinguish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// Any free-text input (`text`, `tel`, `url`, `password`, ...).
    #[default]
    Text,
    Email,
    Number,
    Select,
    Textarea,
    Radio,
    Checkbox,
}

impl FieldKind {
    pub fn of(el: &Element) -> Self {
        match el.tag {
            Tag::Select => Self::Select,
            Tag::Textarea => Self::Textarea,
            _ => match el.input_type() {
                InputType::Email => Self::Email,
                InputType::Number => Self::Number,
                InputType::Radio => Self::Radio,
                InputType::Checkbox => Self::Checkbox,
                _ => Self::Text,
            },
        }
    }

    /// Radios and checkboxes are not validated individually on blur or submit.
    pub fn is_toggle(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

/// Everything the rules need to know about one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub id: String,
    pub kind: FieldKind,
    pub value: String,
    /// The `pattern` attribute, if declared.
    pub pattern: Option<String>,
    /// The `title` attribute, used as the pattern message.
    pub title: Option<String>,
    /// Raw `min` attribute text, echoed back in range messages.
    pub min: Option<String>,
    /// Raw `max` attribute text, echoed back in range messages.
    pub max: Option<String>,
    pub validity: ValidityState,
}

impl FieldState {
    /// Snapshot the field `id`. Returns None if it does not exist.
    pub fn capture(doc: &Document, id: &str) -> Option<Self> {
        let el = doc.get(id)?;
        let attr = |name: &str| el.get_attr(name).map(str::to_string);
        Some(Self {
            id: el.id.clone(),
            kind: FieldKind::of(el),
            value: el.control_value(),
            pattern: attr("pattern"),
            title: attr("title"),
            min: attr("min"),
            max: attr("max"),
            validity: doc.validity(id).unwrap_or_default(),
        })
    }
}
