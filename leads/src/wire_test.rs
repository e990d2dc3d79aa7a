use time::macros::datetime;

use super::*;

fn sample_lead() -> LeadSubmission {
    LeadForm {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        phone: "3055551234".to_owned(),
        email: "jane@example.com".to_owned(),
        date_of_birth: "1990-01-01".to_owned(),
        state: "FL".to_owned(),
    }
    .validate()
    .unwrap()
}

#[test]
fn variant_serializes_as_slug() {
    for variant in Variant::ALL {
        assert_eq!(serde_json::to_value(variant).unwrap(), variant.slug());
    }
    assert!(serde_json::from_str::<Variant>("\"vip\"").is_err());
    assert_eq!(Variant::default(), Variant::Classic);
}

#[test]
fn request_defaults_variant_when_missing() {
    let req: SubmitLeadRequest = serde_json::from_str(r#"{"lead":{"firstName":"Jane"}}"#).unwrap();
    assert_eq!(req.variant, Variant::Classic);
    assert_eq!(req.lead.first_name, "Jane");
}

#[test]
fn request_carries_normalized_lead() {
    let req = SubmitLeadRequest::new(&sample_lead(), Variant::Arcade);
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["variant"], "arcade");
    assert_eq!(json["lead"]["dob"], "1990-01-01");
    assert_eq!(json["lead"]["state"], "FL");
}

#[test]
fn accepted_response_omits_empty_fields() {
    let json = serde_json::to_value(SubmitLeadResponse::accepted()).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true }));
}

#[test]
fn rejected_response_lists_field_errors_with_messages() {
    let errors: ValidationErrors = [FieldError::format(Field::Phone), FieldError::required(Field::State)]
        .into_iter()
        .collect();
    let resp = SubmitLeadResponse::rejected(&errors);
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["errors"][0], serde_json::json!({ "field": "phone", "kind": "format", "message": "10 digits" }));
    assert_eq!(json["errors"][1]["field"], "state");
    assert_eq!(resp.validation_errors(), errors);
}

#[test]
fn response_parses_without_optional_keys() {
    let resp: SubmitLeadResponse = serde_json::from_str(r#"{"ok":false,"message":"slow down"}"#).unwrap();
    assert!(!resp.ok);
    assert!(resp.errors.is_empty());
    assert!(resp.validation_errors().is_empty());
    assert_eq!(resp.message.as_deref(), Some("slow down"));
}

#[test]
fn webhook_payload_flattens_lead_fields() {
    let payload = WebhookPayload::new(sample_lead(), Variant::Classic, datetime!(2026-10-18 12:30:00 UTC));
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "phone": "3055551234",
            "email": "jane@example.com",
            "dob": "1990-01-01",
            "state": "FL",
            "variant": "classic",
            "submittedAt": "2026-10-18T12:30:00Z"
        })
    );
}
