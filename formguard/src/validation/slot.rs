//! Error slot display.
//!
//! A field's slot text and its error class change together: both are set
//! only when the slot exists, and both are cleared together.

use formdom::Document;

use crate::config::ValidatorConfig;

pub(crate) struct ErrorSlots<'a> {
    config: &'a ValidatorConfig,
}

impl<'a> ErrorSlots<'a> {
    pub(crate) fn new(config: &'a ValidatorConfig) -> Self {
        Self { config }
    }

    pub(crate) fn slot_id(&self, field_id: &str) -> String {
        self.config.slot_id(field_id)
    }

    /// Show `message` for `field_id`. Returns false if the page has no slot
    /// for it, in which case nothing changes.
    pub(crate) fn show(&self, doc: &mut Document, field_id: &str, message: &str) -> bool {
        let slot = self.slot_id(field_id);
        if !doc.set_text(&slot, message) {
            log::warn!("no error slot '{slot}' for field '{field_id}'; dropping message");
            return false;
        }
        doc.toggle_class(field_id, &self.config.error_class, true);
        true
    }

    pub(crate) fn clear(&self, doc: &mut Document, field_id: &str) {
        let slot = self.slot_id(field_id);
        if doc.set_text(&slot, "") {
            doc.toggle_class(field_id, &self.config.error_class, false);
        }
    }

    /// Radio groups carry a slot but no class.
    pub(crate) fn show_group(&self, doc: &mut Document, group: &str, message: &str) {
        let slot = self.slot_id(group);
        if !doc.set_text(&slot, message) {
            log::warn!("no error slot '{slot}' for radio group '{group}'; dropping message");
        }
    }

    pub(crate) fn clear_group(&self, doc: &mut Document, group: &str) {
        doc.set_text(&self.slot_id(group), "");
    }

    /// Current slot text for `id`, if the slot exists and is non-empty.
    pub(crate) fn text(&self, doc: &Document, id: &str) -> Option<String> {
        doc.text_of(&self.slot_id(id))
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}
