use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Form,
    Input,
    Select,
    Option,
    Optgroup,
    Textarea,
    Label,
    Span,
    #[default]
    Div,
    Button,
    #[serde(other)]
    Other,
}

impl Tag {
    /// Interactive controls a form collects: `input`, `select`, `textarea`.
    pub fn is_control(self) -> bool {
        matches!(self, Self::Input | Self::Select | Self::Textarea)
    }
}

/// The `type` of an `input` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    #[default]
    Text,
    Search,
    Tel,
    Url,
    Email,
    Password,
    Number,
    Range,
    Date,
    Checkbox,
    Radio,
    Hidden,
    Submit,
    Reset,
    Button,
}

impl InputType {
    /// Parse a `type` attribute. Missing or unknown types behave as `text`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Self::Search,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "range" => Self::Range,
            "date" => Self::Date,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "hidden" => Self::Hidden,
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "button" => Self::Button,
            _ => Self::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Range => "range",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Hidden => "hidden",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }

    /// Types that accept free text and honor `pattern`.
    pub fn is_text_like(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Search | Self::Tel | Self::Url | Self::Email | Self::Password
        )
    }

    /// Types that are barred from constraint validation.
    pub fn skips_validation(self) -> bool {
        matches!(self, Self::Hidden | Self::Submit | Self::Reset | Self::Button)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Range)
    }
}
