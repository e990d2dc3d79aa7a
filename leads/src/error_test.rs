use super::*;

#[test]
fn messages_match_form_copy() {
    assert_eq!(FieldError::required(Field::Email).message(), "Required");
    assert_eq!(FieldError::format(Field::Phone).message(), "10 digits");
    assert_eq!(FieldError::format(Field::Email).message(), "Invalid email");
    assert_eq!(FieldError::format(Field::DateOfBirth).message(), "Invalid date");
}

#[test]
fn display_includes_label_and_message() {
    assert_eq!(FieldError::format(Field::Phone).to_string(), "Phone: 10 digits");
    assert_eq!(FieldError::required(Field::State).to_string(), "State: Required");
}

#[test]
fn push_keeps_field_order_regardless_of_insertion_order() {
    let mut errors = ValidationErrors::new();
    errors.push(FieldError::required(Field::State));
    errors.push(FieldError::format(Field::Phone));
    errors.push(FieldError::required(Field::FirstName));
    assert_eq!(errors.fields(), vec![Field::FirstName, Field::Phone, Field::State]);
}

#[test]
fn push_replaces_existing_error_for_same_field() {
    let mut errors = ValidationErrors::new();
    errors.push(FieldError::required(Field::Phone));
    errors.push(FieldError::format(Field::Phone));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Phone).map(|e| e.kind), Some(ErrorKind::Format));
}

#[test]
fn remove_only_touches_named_field() {
    let mut errors: ValidationErrors = [FieldError::required(Field::Email), FieldError::required(Field::LastName)]
        .into_iter()
        .collect();
    assert!(errors.remove(Field::Email));
    assert!(!errors.remove(Field::Email));
    assert_eq!(errors.fields(), vec![Field::LastName]);
}

#[test]
fn serializes_as_plain_array() {
    let errors: ValidationErrors = [FieldError::format(Field::Email)].into_iter().collect();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!([{ "field": "email", "kind": "format" }]));
}

#[test]
fn summary_display_counts_fields() {
    let errors: ValidationErrors = [FieldError::required(Field::Email), FieldError::required(Field::Phone)]
        .into_iter()
        .collect();
    assert_eq!(errors.to_string(), "2 field(s) failed validation");
}
