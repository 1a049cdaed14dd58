pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod types;
pub mod validity;

pub use document::Document;
pub use element::Element;
pub use error::DocumentError;
pub use event::{Event, EventKind, EventOutcome};
pub use types::*;
pub use validity::ValidityState;
