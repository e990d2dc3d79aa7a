use super::*;

fn valid_args() -> LeadArgs {
    LeadArgs {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        phone: "3055551234".into(),
        email: "jane@example.com".into(),
        dob: "1990-01-01".into(),
        state: "FL".into(),
    }
}

#[test]
fn cli_parses_submit_flags() {
    let cli = Cli::try_parse_from([
        "leadctl",
        "--base-url",
        "http://localhost:8080/",
        "submit",
        "--first-name",
        "Jane",
        "--dob",
        "1990-01-01",
        "--variant",
        "arcade",
    ])
    .unwrap();

    assert_eq!(cli.base_url, "http://localhost:8080/");
    let Command::Submit { lead, variant } = cli.command else {
        panic!("expected submit");
    };
    assert_eq!(lead.first_name, "Jane");
    assert_eq!(lead.dob, "1990-01-01");
    assert_eq!(lead.state, "");
    assert_eq!(Variant::from(variant), Variant::Arcade);
}

#[test]
fn context_joins_paths_without_double_slash() {
    let ctx = CliContext { base_url: "http://localhost:3000/".into(), timeout: Duration::from_secs(1) };
    assert_eq!(ctx.url("/healthz"), "http://localhost:3000/healthz");
}

#[test]
fn validate_maps_args_onto_form() {
    let submission = validate(valid_args()).unwrap();
    assert_eq!(submission.date_of_birth().to_iso_string(), "1990-01-01");
    assert_eq!(submission.state().code(), "FL");
}

#[test]
fn validate_reports_every_bad_field() {
    let args = LeadArgs { phone: "12345".into(), state: "fl".into(), ..valid_args() };
    let Err(CliError::Invalid(errors)) = validate(args) else {
        panic!("expected invalid");
    };
    assert_eq!(errors.fields(), vec![Field::Phone, Field::State]);
}

#[test]
fn interpret_response_accepts_ok_body() {
    assert!(interpret_response(200, Some(SubmitLeadResponse::accepted())).is_ok());
    assert!(interpret_response(204, None).is_ok());
}

#[test]
fn interpret_response_surfaces_server_rejection() {
    let errors: ValidationErrors = [leads::FieldError::format(Field::Email)].into_iter().collect();
    let result = interpret_response(422, Some(SubmitLeadResponse::rejected(&errors)));
    assert!(matches!(result, Err(CliError::Rejected(e)) if e == errors));
}

#[test]
fn interpret_response_reports_upstream_failure() {
    let result = interpret_response(502, Some(SubmitLeadResponse::failed("lead could not be delivered")));
    assert!(matches!(
        result,
        Err(CliError::ServerError { status: 502, ref message }) if message == "lead could not be delivered"
    ));
    assert!(matches!(interpret_response(500, None), Err(CliError::ServerError { status: 500, .. })));
}

#[test]
fn every_field_has_a_flag() {
    for field in Field::ALL {
        assert!(field_flag(field).starts_with("--"));
    }
}
