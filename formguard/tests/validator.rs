use formguard::prelude::*;
use formguard::validation::messages;

fn field_with_slot(field: Element) -> Vec<Element> {
    let slot = Element::span().id(format!("error-{}", field.id));
    vec![field, slot]
}

fn registration_page() -> Element {
    Element::div().id("page").child(
        Element::form()
            .id("registrationForm")
            .child(Element::label("Full name"))
            .children(field_with_slot(
                Element::input(InputType::Text).id("fullName").required(),
            ))
            .children(field_with_slot(
                Element::input(InputType::Email).id("email").required(),
            ))
            .children(field_with_slot(
                Element::input(InputType::Tel)
                    .id("phone")
                    .pattern("[0-9]{10}")
                    .title("Phone number must be 10 digits."),
            ))
            .children(field_with_slot(
                Element::input(InputType::Text).id("zip").pattern("[0-9]{5}"),
            ))
            .children(field_with_slot(
                Element::input(InputType::Number)
                    .id("age")
                    .min("18")
                    .max("120"),
            ))
            .children(field_with_slot(
                Element::select().id("country").children([
                    Element::option("", "Select a country"),
                    Element::option("us", "United States"),
                    Element::option("ca", "Canada"),
                ]),
            ))
            .children(field_with_slot(Element::textarea().id("comments")))
            .child(
                Element::input(InputType::Radio)
                    .id("contactEmail")
                    .name("contactMethod")
                    .value("email"),
            )
            .child(
                Element::input(InputType::Radio)
                    .id("contactPhone")
                    .name("contactMethod")
                    .value("phone"),
            )
            .child(Element::span().id("error-contactMethod"))
            // No error slot for this one
            .child(Element::input(InputType::Text).id("nickname").required()),
    )
}

fn setup() -> (Document, FormValidator) {
    let mut doc = Document::new(registration_page());
    let validator = FormValidator::bind(&mut doc, ValidatorConfig::default()).unwrap();
    (doc, validator)
}

fn assert_display_consistent(doc: &Document, validator: &FormValidator) {
    for id in validator.fields() {
        let slot = doc.text_of(&format!("error-{id}")).unwrap_or("");
        assert_eq!(
            doc.has_class(id, "input-error"),
            !slot.is_empty(),
            "class and slot diverged for '{id}'"
        );
    }
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_disables_native_validation() {
    let (doc, _) = setup();
    assert!(doc.get("registrationForm").unwrap().has_attr("novalidate"));
}

#[test]
fn test_bind_collects_controls_in_document_order() {
    let (_, validator) = setup();
    assert_eq!(
        validator.fields(),
        [
            "fullName",
            "email",
            "phone",
            "zip",
            "age",
            "country",
            "comments",
            "contactEmail",
            "contactPhone",
            "nickname",
        ]
    );
}

#[test]
fn test_bind_registers_listeners() {
    let (_, validator) = setup();
    // Blur and input per field, one submit on the form
    assert_eq!(validator.listeners().len(), 10 * 2 + 1);
    assert!(validator.is_listening(&Event::blur("email")));
    assert!(validator.is_listening(&Event::input("contactEmail")));
    assert!(validator.is_listening(&Event::submit("registrationForm")));
    assert!(!validator.is_listening(&Event::submit("email")));
    assert!(!validator.is_listening(&Event::blur("error-email")));
}

#[test]
fn test_bind_missing_form() {
    let mut doc = Document::new(registration_page());
    let err = FormValidator::bind(&mut doc, ValidatorConfig::new("loginForm")).unwrap_err();
    assert_eq!(
        err,
        BindError::FormNotFound {
            form_id: "loginForm".to_string()
        }
    );
}

#[test]
fn test_bind_rejects_non_form() {
    let mut doc = Document::new(registration_page());
    let err = FormValidator::bind(&mut doc, ValidatorConfig::new("page")).unwrap_err();
    assert!(matches!(err, BindError::NotAForm { .. }));
    assert!(err.to_string().contains("<div>"));
}

// ============================================================================
// validate_field
// ============================================================================

#[test]
fn test_required_empty_field() {
    let (mut doc, validator) = setup();
    assert!(!validator.validate_field(&mut doc, "fullName"));
    assert_eq!(doc.text_of("error-fullName"), Some(messages::REQUIRED));
    assert!(doc.has_class("fullName", "input-error"));
}

#[test]
fn test_required_wins_over_other_rules() {
    let page = Element::form().id("registrationForm").children([
        Element::input(InputType::Email)
            .id("work")
            .required()
            .pattern(".+@corp\\.com")
            .title("Use your corporate address."),
        Element::span().id("error-work"),
    ]);
    let mut doc = Document::new(page);
    let validator = FormValidator::bind(&mut doc, ValidatorConfig::default()).unwrap();

    assert!(!validator.validate_field(&mut doc, "work"));
    assert_eq!(doc.text_of("error-work"), Some("This field is required."));
}

#[test]
fn test_invalid_email() {
    let (mut doc, validator) = setup();
    doc.set_value("email", "not-an-email").unwrap();
    assert!(!validator.validate_field(&mut doc, "email"));
    assert_eq!(
        doc.text_of("error-email"),
        Some("Entered value needs to be an email address.")
    );
}

#[test]
fn test_email_rejects_display_name_quoting_and_literals() {
    let (mut doc, validator) = setup();
    for value in [
        "Jane Doe <jane@example.com>",
        "\"john doe\"@example.com",
        "user@[127.0.0.1]",
    ] {
        doc.set_value("email", value).unwrap();
        assert!(!validator.validate_field(&mut doc, "email"), "{value:?}");
        assert_eq!(
            doc.text_of("error-email"),
            Some("Entered value needs to be an email address.")
        );
        assert!(doc.has_class("email", "input-error"));
    }
}

#[test]
fn test_email_accepts_single_label_domain() {
    let (mut doc, validator) = setup();
    doc.set_value("email", "a@b").unwrap();
    assert!(validator.validate_field(&mut doc, "email"));
    assert_eq!(doc.text_of("error-email"), Some(""));
}

#[test]
fn test_whitespace_email_is_required_not_malformed() {
    let (mut doc, validator) = setup();
    doc.set_value("email", "   ").unwrap();
    assert!(!validator.validate_field(&mut doc, "email"));
    assert_eq!(doc.text_of("error-email"), Some("This field is required."));
}

#[test]
fn test_valid_email_passes() {
    let (mut doc, validator) = setup();
    doc.set_value("email", "ada@example.com").unwrap();
    assert!(validator.validate_field(&mut doc, "email"));
    assert_eq!(doc.text_of("error-email"), Some(""));
    assert!(!doc.has_class("email", "input-error"));
}

#[test]
fn test_pattern_uses_title() {
    let (mut doc, validator) = setup();
    doc.set_value("phone", "555-1234").unwrap();
    assert!(!validator.validate_field(&mut doc, "phone"));
    assert_eq!(
        doc.text_of("error-phone"),
        Some("Phone number must be 10 digits.")
    );
}

#[test]
fn test_pattern_without_title_uses_fallback() {
    let (mut doc, validator) = setup();
    doc.set_value("zip", "abcde").unwrap();
    assert!(!validator.validate_field(&mut doc, "zip"));
    assert_eq!(
        doc.text_of("error-zip"),
        Some("Please match the required format.")
    );
}

#[test]
fn test_empty_optional_pattern_field_passes() {
    let (mut doc, validator) = setup();
    assert!(validator.validate_field(&mut doc, "phone"));
    assert!(validator.validate_field(&mut doc, "zip"));
}

#[test]
fn test_number_below_min() {
    let (mut doc, validator) = setup();
    doc.set_value("age", "17").unwrap();
    assert!(!validator.validate_field(&mut doc, "age"));
    assert_eq!(doc.text_of("error-age"), Some("Value must be at least 18."));
}

#[test]
fn test_number_above_max() {
    let (mut doc, validator) = setup();
    doc.set_value("age", "121").unwrap();
    assert!(!validator.validate_field(&mut doc, "age"));
    assert_eq!(
        doc.text_of("error-age"),
        Some("Value must be no more than 120.")
    );
}

#[test]
fn test_number_range_bounds_are_inclusive() {
    let (mut doc, validator) = setup();
    for value in ["18", "42", "120"] {
        doc.set_value("age", value).unwrap();
        assert!(validator.validate_field(&mut doc, "age"), "age {value}");
    }
}

#[test]
fn test_select_placeholder_fails_without_required() {
    let (mut doc, validator) = setup();
    assert!(!doc.get("country").unwrap().has_attr("required"));
    assert!(!validator.validate_field(&mut doc, "country"));
    assert_eq!(
        doc.text_of("error-country"),
        Some("Please select an option from the list.")
    );
}

#[test]
fn test_select_with_choice_passes() {
    let (mut doc, validator) = setup();
    doc.set_value("country", "ca").unwrap();
    assert!(validator.validate_field(&mut doc, "country"));
}

#[test]
fn test_revalidation_replaces_message() {
    let (mut doc, validator) = setup();
    assert!(!validator.validate_field(&mut doc, "email"));
    assert_eq!(doc.text_of("error-email"), Some(messages::REQUIRED));

    doc.set_value("email", "nope").unwrap();
    assert!(!validator.validate_field(&mut doc, "email"));
    assert_eq!(doc.text_of("error-email"), Some(messages::EMAIL));

    doc.set_value("email", "ada@example.com").unwrap();
    assert!(validator.validate_field(&mut doc, "email"));
    assert_eq!(doc.text_of("error-email"), Some(""));
    assert!(!doc.has_class("email", "input-error"));
}

#[test]
fn test_missing_slot_keeps_result() {
    let (mut doc, validator) = setup();
    assert!(!validator.validate_field(&mut doc, "nickname"));
    assert!(!doc.has_class("nickname", "input-error"));

    doc.set_value("nickname", "ada").unwrap();
    assert!(validator.validate_field(&mut doc, "nickname"));
}

#[test]
fn test_class_tracks_slot_text() {
    let (mut doc, validator) = setup();
    let fields = validator.fields().to_vec();
    for id in &fields {
        validator.validate_field(&mut doc, id);
    }
    assert_display_consistent(&doc, &validator);

    doc.set_value("fullName", "Ada Lovelace").unwrap();
    doc.set_value("email", "ada@example.com").unwrap();
    doc.set_value("age", "200").unwrap();
    for id in &fields {
        validator.validate_field(&mut doc, id);
    }
    assert_display_consistent(&doc, &validator);
}

// ============================================================================
// Blur and input
// ============================================================================

#[test]
fn test_blur_validates_field() {
    let (mut doc, validator) = setup();
    let outcome = validator.dispatch(&mut doc, &Event::blur("fullName"));
    assert_eq!(outcome, EventOutcome::Proceed);
    assert_eq!(doc.text_of("error-fullName"), Some(messages::REQUIRED));
}

#[test]
fn test_blur_skips_radio_and_checkbox() {
    let page = Element::form().id("registrationForm").children([
        Element::input(InputType::Checkbox).id("terms").required(),
        Element::span().id("error-terms"),
        Element::input(InputType::Radio)
            .id("plan")
            .name("plan")
            .required(),
        Element::span().id("error-plan"),
    ]);
    let mut doc = Document::new(page);
    let validator = FormValidator::bind(&mut doc, ValidatorConfig::default()).unwrap();

    validator.dispatch(&mut doc, &Event::blur("terms"));
    validator.dispatch(&mut doc, &Event::blur("plan"));
    assert_eq!(doc.text_of("error-terms"), Some(""));
    assert_eq!(doc.text_of("error-plan"), Some(""));

    // Direct validation still applies the rules
    assert!(!validator.validate_field(&mut doc, "terms"));
    assert_eq!(doc.text_of("error-terms"), Some(messages::REQUIRED));
}

#[test]
fn test_input_clears_once_natively_valid() {
    let (mut doc, validator) = setup();
    validator.dispatch(&mut doc, &Event::blur("email"));
    assert_eq!(doc.text_of("error-email"), Some(messages::REQUIRED));

    // Still invalid: message stays
    doc.set_value("email", "ada@").unwrap();
    validator.dispatch(&mut doc, &Event::input("email"));
    assert_eq!(doc.text_of("error-email"), Some(messages::REQUIRED));
    assert!(doc.has_class("email", "input-error"));

    doc.set_value("email", "ada@example.com").unwrap();
    validator.dispatch(&mut doc, &Event::input("email"));
    assert_eq!(doc.text_of("error-email"), Some(""));
    assert!(!doc.has_class("email", "input-error"));
}

#[test]
fn test_input_clears_even_when_custom_rule_fails() {
    let (mut doc, validator) = setup();
    validator.dispatch(&mut doc, &Event::blur("country"));
    assert_eq!(doc.text_of("error-country"), Some(messages::SELECT));

    // The placeholder is natively valid (no `required`), so input clears it
    validator.dispatch(&mut doc, &Event::input("country"));
    assert_eq!(doc.text_of("error-country"), Some(""));

    // The next blur brings it back
    validator.dispatch(&mut doc, &Event::blur("country"));
    assert_eq!(doc.text_of("error-country"), Some(messages::SELECT));
}

#[test]
fn test_events_for_unknown_targets_are_ignored() {
    let (mut doc, validator) = setup();
    assert_eq!(
        validator.dispatch(&mut doc, &Event::blur("page")),
        EventOutcome::Proceed
    );
    assert_eq!(
        validator.dispatch(&mut doc, &Event::submit("page")),
        EventOutcome::Proceed
    );
    assert!(validator.visible_errors(&doc).is_empty());
}
