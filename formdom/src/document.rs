//! Document ownership and id-based access.

use crate::element::{collect_descendants, find_element, find_element_mut, path_to, Element};
use crate::error::DocumentError;
use crate::types::Tag;
use crate::validity::{self, ValidityState};

/// A document tree, addressed by element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Descendants of `id` matching `pred`, in document order.
    /// Returns an empty list if `id` does not exist.
    pub fn descendants_of(&self, id: &str, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        if let Some(el) = self.get(id) {
            collect_descendants(el, &pred, &mut out);
        }
        out
    }

    /// The nearest `form` ancestor of `id` (not including `id` itself).
    pub fn form_of(&self, id: &str) -> Option<&Element> {
        let mut path = Vec::new();
        if !path_to(&self.root, id, &mut path) {
            return None;
        }
        path.pop();
        path.into_iter().rev().find(|el| el.tag == Tag::Form)
    }

    /// Radio buttons sharing `name` inside the form with id `form_id`.
    pub fn radio_members(&self, form_id: &str, name: &str) -> Vec<&Element> {
        self.descendants_of(form_id, |el| {
            el.is_radio() && el.get_attr("name") == Some(name)
        })
        .into_iter()
        .filter(|el| self.form_of(&el.id).map(|f| f.id.as_str()) == Some(form_id))
        .collect()
    }

    /// Whether any radio in the same group as `id` is checked.
    ///
    /// A group is every radio with the same `name` owned by the same form.
    /// A radio without a name forms a group of its own.
    pub fn radio_group_checked(&self, id: &str) -> bool {
        let Some(radio) = self.get(id) else {
            return false;
        };
        let name = match radio.get_attr("name") {
            Some(name) if !name.is_empty() => name,
            _ => return radio.checked,
        };
        let form = self.form_of(id).map(|f| f.id.clone());
        self.group_ids(form.as_deref(), name)
            .iter()
            .filter_map(|member| self.get(member))
            .any(|el| el.checked)
    }

    /// Ids of radios named `name` whose owning form is `form`.
    fn group_ids(&self, form: Option<&str>, name: &str) -> Vec<String> {
        let mut all = Vec::new();
        collect_descendants(
            &self.root,
            &|el: &Element| el.is_radio() && el.get_attr("name") == Some(name),
            &mut all,
        );
        all.into_iter()
            .filter(|el| self.form_of(&el.id).map(|f| f.id.as_str()) == form)
            .map(|el| el.id.clone())
            .collect()
    }

    pub fn value_of(&self, id: &str) -> Option<String> {
        self.get(id).map(Element::control_value)
    }

    /// Set the value of a control, as typing or picking an option would.
    pub fn set_value(&mut self, id: &str, value: &str) -> Result<(), DocumentError> {
        let el = self.get_mut(id).ok_or_else(|| DocumentError::not_found(id))?;
        match el.tag {
            Tag::Select => {
                if !el.select_option(value) {
                    return Err(DocumentError::NoSuchOption {
                        id: id.to_string(),
                        value: value.to_string(),
                    });
                }
            }
            Tag::Input | Tag::Textarea => el.value = value.to_string(),
            _ => return Err(DocumentError::not_a_control(id)),
        }
        log::debug!("set value of '{id}'");
        Ok(())
    }

    /// Set the checked state of a checkbox or radio. Checking a radio
    /// unchecks the other members of its group.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<(), DocumentError> {
        let el = self.get(id).ok_or_else(|| DocumentError::not_found(id))?;
        if !el.is_radio() && !el.is_checkbox() {
            return Err(DocumentError::not_a_control(id));
        }

        let siblings = match el.get_attr("name") {
            Some(name) if checked && el.is_radio() && !name.is_empty() => {
                let form = self.form_of(id).map(|f| f.id.clone());
                self.group_ids(form.as_deref(), name)
            }
            _ => Vec::new(),
        };

        for other in siblings.iter().filter(|other| other.as_str() != id) {
            if let Some(el) = self.get_mut(other) {
                el.checked = false;
            }
        }
        if let Some(el) = self.get_mut(id) {
            el.checked = checked;
        }
        Ok(())
    }

    /// Text content of `id`, or None if the element does not exist.
    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(Element::text_content)
    }

    /// Replace the text content of `id`. Returns false if it does not exist.
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Add or remove a class on `id`. Returns false if it does not exist.
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                if on {
                    el.add_class(class);
                } else {
                    el.remove_class(class);
                }
                true
            }
            None => false,
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    /// Native validity of the control `id`, or None if it does not exist.
    pub fn validity(&self, id: &str) -> Option<ValidityState> {
        self.get(id).map(|el| validity::compute(self, el))
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}
