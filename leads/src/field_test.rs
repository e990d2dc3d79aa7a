use super::*;

#[test]
fn all_is_in_form_order() {
    let mut sorted = Field::ALL;
    sorted.sort();
    assert_eq!(sorted, Field::ALL);
    assert_eq!(Field::ALL.first(), Some(&Field::FirstName));
    assert_eq!(Field::ALL.last(), Some(&Field::State));
}

#[test]
fn unknown_wire_key_does_not_deserialize() {
    for field in Field::ALL {
        let parsed: Field = serde_json::from_value(serde_json::json!(field.key())).unwrap();
        assert_eq!(parsed, field);
    }
    assert!(serde_json::from_str::<Field>("\"dateOfBirth\"").is_err());
}

#[test]
fn serde_uses_wire_keys() {
    assert_eq!(serde_json::to_string(&Field::DateOfBirth).unwrap(), "\"dob\"");
    assert_eq!(serde_json::to_string(&Field::FirstName).unwrap(), "\"firstName\"");
    let parsed: Field = serde_json::from_str("\"lastName\"").unwrap();
    assert_eq!(parsed, Field::LastName);
}

#[test]
fn display_matches_key() {
    assert_eq!(Field::Phone.to_string(), "phone");
}
