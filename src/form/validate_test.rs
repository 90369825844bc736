use super::*;
use crate::form::SubmitControl;

fn field(kind: FieldKind, required: bool, value: &str) -> Field {
    Field::new("f", kind).required(required).with_value(value)
}

// =============================================================
// Required
// =============================================================

#[test]
fn required_empty_field_is_invalid() {
    for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Tel, FieldKind::Other] {
        let mut f = field(kind, true, "");
        assert!(!validate_field(&mut f));
        assert_eq!(f.error(), Some(&ValidationError::MissingRequired));
        assert_eq!(f.error().map(ToString::to_string).as_deref(), Some("This field is required"));
        assert!(f.is_errored());
    }
}

#[test]
fn required_whitespace_only_counts_as_empty() {
    let mut f = field(FieldKind::Text, true, "   \t ");
    assert!(!validate_field(&mut f));
    assert_eq!(f.error(), Some(&ValidationError::MissingRequired));
}

#[test]
fn required_rule_wins_over_format_rule() {
    assert_eq!(check("", FieldKind::Email, true), Err(ValidationError::MissingRequired));
    assert_eq!(check(" ", FieldKind::Tel, true), Err(ValidationError::MissingRequired));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_simple_address() {
    let mut f = field(FieldKind::Email, true, "a@b.com");
    assert!(validate_field(&mut f));
    assert!(f.error().is_none());
}

#[test]
fn email_rejects_missing_at() {
    let mut f = field(FieldKind::Email, false, "not-an-email");
    assert!(!validate_field(&mut f));
    assert_eq!(
        f.error().map(ToString::to_string).as_deref(),
        Some("Please enter a valid email address")
    );
}

#[test]
fn optional_empty_email_is_valid() {
    let mut f = field(FieldKind::Email, false, "");
    assert!(validate_field(&mut f));
    assert!(!f.is_errored());
}

#[test]
fn email_format_edge_cases() {
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(is_valid_email("x@.a.b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a b@c.com"));
}

#[test]
fn email_is_checked_after_trimming() {
    assert_eq!(check("  a@b.com  ", FieldKind::Email, true), Ok(()));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_accepts_formatted_number() {
    let mut f = field(FieldKind::Tel, true, "+1 (555) 123-4567");
    assert!(validate_field(&mut f));
}

#[test]
fn phone_rejects_words() {
    let mut f = field(FieldKind::Tel, false, "call me");
    assert!(!validate_field(&mut f));
    assert_eq!(
        f.error().map(ToString::to_string).as_deref(),
        Some("Please enter a valid phone number")
    );
}

#[test]
fn phone_rejects_other_punctuation() {
    assert!(!is_valid_phone("555.123.4567"));
    assert!(!is_valid_phone("555-CALL"));
    assert!(!is_valid_phone(""));
    assert!(is_valid_phone("0"));
}

#[test]
fn format_rules_do_not_apply_to_other_kinds() {
    assert_eq!(check("call me", FieldKind::Text, true), Ok(()));
    assert_eq!(check("not-an-email", FieldKind::Other, false), Ok(()));
}

// =============================================================
// Display side effects
// =============================================================

#[test]
fn revalidating_unchanged_field_is_idempotent() {
    let mut f = field(FieldKind::Email, true, "nope");
    let first = validate_field(&mut f);
    let after_first = f.clone();
    let second = validate_field(&mut f);
    assert_eq!(first, second);
    assert_eq!(f, after_first);
    assert_eq!(f.error(), Some(&ValidationError::InvalidEmailFormat));
}

#[test]
fn valid_result_clears_previous_error() {
    let mut f = field(FieldKind::Tel, true, "abc");
    assert!(!validate_field(&mut f));
    f.set_value("555 0100");
    assert!(validate_field(&mut f));
    assert!(!f.is_errored());
}

#[test]
fn editing_clears_error_before_revalidation() {
    let mut f = field(FieldKind::Text, true, "");
    assert!(!validate_field(&mut f));
    f.set_value("x");
    assert!(f.error().is_none());
    f.set_value("");
    assert!(f.error().is_none(), "edit alone never re-validates");
}

// =============================================================
// Form aggregation
// =============================================================

#[test]
fn validate_form_reports_every_invalid_field() {
    let mut form = Form::new(
        vec![
            Field::new("name", FieldKind::Text).required(true),
            Field::new("email", FieldKind::Email).with_value("bad"),
            Field::new("phone", FieldKind::Tel).with_value("x"),
        ],
        SubmitControl::new("Send"),
    );
    assert!(!validate_form(&mut form));
    assert_eq!(form.error_count(), 3);
}

#[test]
fn validate_form_one_invalid_one_valid() {
    let mut form = Form::new(
        vec![
            Field::new("email", FieldKind::Email).with_value("not-an-email"),
            Field::new("name", FieldKind::Text).required(true).with_value("Ada"),
        ],
        SubmitControl::new("Send"),
    );
    assert!(!validate_form(&mut form));
    assert_eq!(form.error_count(), 1);
    assert!(form.field("email").is_some_and(Field::is_errored));
    assert!(form.field("name").is_some_and(|f| !f.is_errored()));
}

#[test]
fn validate_form_all_valid() {
    let mut form = Form::new(
        vec![Field::new("msg", FieldKind::Other).required(true).with_value("hi")],
        SubmitControl::new("Send"),
    );
    assert!(validate_form(&mut form));
    assert_eq!(form.error_count(), 0);
}

#[test]
fn empty_form_is_valid() {
    let mut form = Form::default();
    assert!(validate_form(&mut form));
}

#[test]
fn field_kind_from_input_type() {
    assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
    assert_eq!(FieldKind::from_input_type("TEL"), FieldKind::Tel);
    assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
    assert_eq!(FieldKind::from_input_type(""), FieldKind::Text);
    assert_eq!(FieldKind::from_input_type("textarea"), FieldKind::Other);
    assert_eq!(FieldKind::from_input_type("password"), FieldKind::Other);
}

#[test]
fn only_text_entry_inputs_are_tracked() {
    for raw in ["", "text", "email", "TEL", "password", "number", "url", "search"] {
        assert!(FieldKind::is_text_entry(raw), "{raw:?} should be tracked");
    }
    for raw in ["hidden", "submit", "Checkbox", "radio", "button", "reset", "file", " image "] {
        assert!(!FieldKind::is_text_entry(raw), "{raw:?} should be left alone");
    }
}
