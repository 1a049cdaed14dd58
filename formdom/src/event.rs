/// High-level form events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A control lost focus
    Blur { target: String },
    /// A control's value or checked state changed
    Input { target: String },
    /// A form was submitted
    Submit { target: String },
}

impl Event {
    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Blur { .. } => EventKind::Blur,
            Self::Input { .. } => EventKind::Input,
            Self::Submit { .. } => EventKind::Submit,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Blur { target } | Self::Input { target } | Self::Submit { target } => target,
        }
    }
}

/// Event type, used to key listener registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Blur,
    Input,
    Submit,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blur => write!(f, "blur"),
            Self::Input => write!(f, "input"),
            Self::Submit => write!(f, "submit"),
        }
    }
}

/// What the user agent should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOutcome {
    /// Run the default action (e.g. submit the form).
    #[default]
    Proceed,
    /// The default action was prevented.
    Prevented,
}

impl EventOutcome {
    pub fn is_prevented(self) -> bool {
        self == Self::Prevented
    }
}
