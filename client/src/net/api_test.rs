use leads::{Field, FieldError};

use super::*;

fn rejected_body() -> SubmitLeadResponse {
    let errors: ValidationErrors = [FieldError::format(Field::Email)].into_iter().collect();
    SubmitLeadResponse::rejected(&errors)
}

#[test]
fn upstream_failed_message_formats_status() {
    assert_eq!(upstream_failed_message(502), "lead submission failed: 502");
}

#[test]
fn interpret_response_accepts_ok_body() {
    assert_eq!(interpret_response(200, Some(SubmitLeadResponse::accepted())), Ok(()));
}

#[test]
fn interpret_response_accepts_success_without_body() {
    assert_eq!(interpret_response(204, None), Ok(()));
}

#[test]
fn interpret_response_maps_rate_limit() {
    assert_eq!(
        interpret_response(429, Some(SubmitLeadResponse::failed("slow down"))),
        Err(SinkError::RateLimited)
    );
}

#[test]
fn interpret_response_maps_field_rejections() {
    let Err(SinkError::Rejected(errors)) = interpret_response(422, Some(rejected_body())) else {
        panic!("expected rejection");
    };
    assert_eq!(errors.fields(), vec![Field::Email]);
}

#[test]
fn interpret_response_uses_server_message_for_upstream_errors() {
    assert_eq!(
        interpret_response(502, Some(SubmitLeadResponse::failed("webhook down"))),
        Err(SinkError::Upstream { status: 502, message: "webhook down".to_owned() })
    );
}

#[test]
fn interpret_response_falls_back_to_status_message() {
    assert_eq!(
        interpret_response(500, None),
        Err(SinkError::Upstream { status: 500, message: "lead submission failed: 500".to_owned() })
    );
}

#[test]
fn interpret_response_treats_not_ok_body_as_upstream_error() {
    let result = interpret_response(200, Some(SubmitLeadResponse::failed("nope")));
    assert!(matches!(result, Err(SinkError::Upstream { status: 200, .. })));
}

#[test]
fn user_messages_are_non_empty() {
    let errors = [
        SinkError::Network("x".to_owned()),
        SinkError::Rejected(ValidationErrors::new()),
        SinkError::RateLimited,
        SinkError::Upstream { status: 502, message: String::new() },
    ];
    assert!(errors.iter().all(|e| !e.user_message().is_empty()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_sink_is_unavailable_outside_browser() {
    let lead = leads::LeadForm {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        phone: "3055551234".to_owned(),
        email: "jane@example.com".to_owned(),
        date_of_birth: "1990-01-01".to_owned(),
        state: "FL".to_owned(),
    }
    .validate()
    .unwrap();
    let result = futures::executor::block_on(HttpLeadSink::new(Variant::Classic).send(&lead));
    assert!(matches!(result, Err(SinkError::Network(_))));
}
