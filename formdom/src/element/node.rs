use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::Content;
use crate::types::{InputType, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

fn default_id() -> String {
    generate_id("el")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    // Identity
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default)]
    pub tag: Tag,

    // Markup
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub classes: Vec<String>,

    // Content
    #[serde(default)]
    pub content: Content,

    // Control state (set by the user agent, not by attributes)
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: default_id(),
            tag: Tag::Div,
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            content: Content::None,
            value: String::new(),
            checked: false,
        }
    }
}

impl Element {
    fn with_tag(prefix: &str, tag: Tag) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::with_tag("form", Tag::Form)
    }

    /// Create an `input` of the given type.
    pub fn input(input_type: InputType) -> Self {
        Self::with_tag("input", Tag::Input).attr("type", input_type.as_str())
    }

    pub fn select() -> Self {
        Self::with_tag("select", Tag::Select)
    }

    /// Create an `option` with a submitted value and a visible label.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_tag("option", Tag::Option)
            .attr("value", value)
            .text(label)
    }

    pub fn textarea() -> Self {
        Self::with_tag("textarea", Tag::Textarea)
    }

    pub fn span() -> Self {
        Self::with_tag("span", Tag::Span)
    }

    pub fn div() -> Self {
        Self::with_tag("div", Tag::Div)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::with_tag("label", Tag::Label).text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.attr("pattern", pattern)
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.attr("title", title)
    }

    pub fn min(self, min: impl Into<String>) -> Self {
        self.attr("min", min)
    }

    pub fn max(self, max: impl Into<String>) -> Self {
        self.attr("max", max)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    // Control state
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Mark an `option` as the selected one.
    pub fn selected(self) -> Self {
        self.attr("selected", "")
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Accessors

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if the class was not already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// The parsed `type` attribute. Only meaningful for `input` elements.
    pub fn input_type(&self) -> InputType {
        self.get_attr("type").map(InputType::parse).unwrap_or_default()
    }

    pub fn is_control(&self) -> bool {
        self.tag.is_control()
    }

    pub fn is_radio(&self) -> bool {
        self.tag == Tag::Input && self.input_type() == InputType::Radio
    }

    pub fn is_checkbox(&self) -> bool {
        self.tag == Tag::Input && self.input_type() == InputType::Checkbox
    }

    /// Text content, or an empty string for elements holding children.
    pub fn text_content(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            _ => "",
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// The submitted value of an `option`: its `value` attribute, else its label.
    pub fn option_value(&self) -> String {
        match self.get_attr("value") {
            Some(value) => value.to_string(),
            None => self.text_content().trim().to_string(),
        }
    }

    /// The current value of a control.
    ///
    /// A `select` reports the first option marked `selected`, falling back to
    /// its first option (the placeholder convention). An empty `select`
    /// reports an empty string. An email input reports its value with
    /// leading and trailing whitespace stripped.
    pub fn control_value(&self) -> String {
        match self.tag {
            Tag::Select => {}
            // Email values are stored without surrounding whitespace
            Tag::Input if self.input_type() == InputType::Email => {
                return self.value.trim_matches(is_ascii_whitespace).to_string();
            }
            _ => return self.value.clone(),
        }

        let mut options = Vec::new();
        collect_options(self, &mut options);
        options
            .iter()
            .find(|opt| opt.has_attr("selected"))
            .or_else(|| options.first())
            .map(|opt| opt.option_value())
            .unwrap_or_default()
    }

    /// Mark the option with `value` as selected, deselecting all others.
    /// Returns false if no option carries that value.
    pub fn select_option(&mut self, value: &str) -> bool {
        let mut options = Vec::new();
        collect_options(self, &mut options);
        if !options.iter().any(|opt| opt.option_value() == value) {
            return false;
        }

        let mut found = false;
        for_each_option_mut(self, &mut |opt| {
            if !found && opt.option_value() == value {
                opt.set_attr("selected", "");
                found = true;
            } else {
                opt.remove_attr("selected");
            }
        });
        true
    }
}

fn is_ascii_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn collect_options<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    for child in el.child_elements() {
        if child.tag == Tag::Option {
            out.push(child);
        } else {
            collect_options(child, out);
        }
    }
}

fn for_each_option_mut(el: &mut Element, f: &mut dyn FnMut(&mut Element)) {
    for child in el.child_elements_mut() {
        if child.tag == Tag::Option {
            f(child);
        } else {
            for_each_option_mut(child, f);
        }
    }
}
