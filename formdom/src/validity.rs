//! Native constraint validation.
//!
//! Mirrors the checks a browser performs from markup alone: `required`,
//! `type`, `pattern`, `min` and `max`. Custom messages are layered on top of
//! these flags by the caller.

use email_address::{EmailAddress, Options};
use regex::Regex;

use crate::document::Document;
use crate::element::Element;
use crate::types::{InputType, Tag};

/// Built-in validity flags for one control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub bad_input: bool,
}

impl ValidityState {
    /// True when no constraint is violated.
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.range_underflow
            || self.range_overflow
            || self.bad_input)
    }
}

/// Compute the validity of `el`, consulting `doc` for radio group state.
pub(crate) fn compute(doc: &Document, el: &Element) -> ValidityState {
    let mut validity = ValidityState::default();

    if !el.is_control() || el.has_attr("disabled") || el.has_attr("readonly") {
        return validity;
    }

    let input_type = el.input_type();
    if el.tag == Tag::Input && input_type.skips_validation() {
        return validity;
    }

    let value = el.control_value();
    let required = el.has_attr("required");

    if required {
        validity.value_missing = match (el.tag, input_type) {
            (Tag::Input, InputType::Checkbox) => !el.checked,
            (Tag::Input, InputType::Radio) => !doc.radio_group_checked(&el.id),
            _ => value.is_empty(),
        };
    }

    if el.tag != Tag::Input || value.is_empty() {
        return validity;
    }

    if input_type == InputType::Email {
        validity.type_mismatch = if el.has_attr("multiple") {
            let mut parts = value.split(',').map(str::trim).filter(|p| !p.is_empty());
            let mut any = false;
            let all_ok = parts.all(|part| {
                any = true;
                is_email(part)
            });
            !(any && all_ok)
        } else {
            !is_email(&value)
        };
    }

    if input_type.is_text_like() {
        if let Some(re) = el.get_attr("pattern").and_then(compile_pattern) {
            validity.pattern_mismatch = if input_type == InputType::Email && el.has_attr("multiple")
            {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .any(|part| !re.is_match(part))
            } else {
                !re.is_match(&value)
            };
        }
    }

    if input_type.is_numeric() {
        match parse_number(&value) {
            Some(n) => {
                if let Some(min) = el.get_attr("min").and_then(parse_number) {
                    validity.range_underflow = n < min;
                }
                if let Some(max) = el.get_attr("max").and_then(parse_number) {
                    validity.range_overflow = n > max;
                }
            }
            None => validity.bad_input = true,
        }
    }

    validity
}

/// A browser-style email address: `local@domain` with no display text,
/// quoting, comments or domain literal. The local part is restricted to
/// ASCII atext and dots, and the domain to LDH labels.
fn is_email(value: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal();
    let Ok(address) = EmailAddress::parse_with_options(value, options) else {
        return false;
    };
    address.local_part().chars().all(is_atext_or_dot)
        && address.domain().split('.').all(is_domain_label)
}

fn is_atext_or_dot(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-.".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Patterns must match the whole value. An empty or invalid pattern imposes
/// no constraint.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("ignoring invalid pattern {pattern:?}: {e}");
            None
        }
    }
}

/// Parse a valid floating-point number as HTML defines it: an optional
/// `-`, digits with an optional fraction (or a bare `.5`), and an optional
/// exponent. Leading `+`, a trailing `.`, whitespace and `inf` are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let (int, frac) = match mantissa.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (mantissa, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = match frac {
        Some(frac) => digits(frac) && (int.is_empty() || digits(int)),
        None => digits(int),
    };
    let exponent_ok = exponent.is_none_or(|exp| {
        digits(exp.strip_prefix(['-', '+']).unwrap_or(exp))
    });
    if !mantissa_ok || !exponent_ok {
        return None;
    }

    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}
