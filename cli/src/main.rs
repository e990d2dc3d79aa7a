use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use leads::{
    Field, LEADS_ENDPOINT, LeadForm, LeadSubmission, SubmitLeadRequest, SubmitLeadResponse, ValidationErrors, Variant,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Invalid(ValidationErrors),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("server rejected lead: {0}")]
    Rejected(ValidationErrors),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "leadctl", about = "Validate and submit landing page leads")]
struct Cli {
    #[arg(long, env = "LEADCTL_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, default_value_t = 15, help = "Request timeout in seconds")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers `/healthz`.
    Ping,
    /// Validate a lead locally with the same rules as the page and server.
    Check(LeadArgs),
    /// Validate a lead locally, then post it to the relay.
    Submit {
        #[command(flatten)]
        lead: LeadArgs,
        #[arg(long, value_enum, default_value_t = VariantArg::Classic)]
        variant: VariantArg,
    },
}

#[derive(Args, Debug, Default)]
struct LeadArgs {
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "", help = "Date of birth, YYYY-MM-DD")]
    dob: String,
    #[arg(long, default_value = "", help = "Two-letter US state code")]
    state: String,
}

impl LeadArgs {
    fn into_form(self) -> LeadForm {
        LeadForm {
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            date_of_birth: self.dob,
            state: self.state,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum VariantArg {
    Classic,
    Arcade,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Classic => Variant::Classic,
            VariantArg::Arcade => Variant::Arcade,
        }
    }
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    timeout: Duration,
}

impl CliContext {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn http(&self) -> Result<reqwest::Client, CliError> {
        Ok(reqwest::Client::builder().timeout(self.timeout).build()?)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, timeout: Duration::from_secs(cli.timeout_secs) };

    let result = match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Check(lead) => run_check(lead),
        Command::Submit { lead, variant } => run_submit(&ctx, lead, variant.into()).await,
    };

    if let Err(CliError::Invalid(errors) | CliError::Rejected(errors)) = &result {
        print_field_errors(errors);
    }
    result
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let response = cli.http()?.get(cli.url("/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

fn run_check(lead: LeadArgs) -> Result<(), CliError> {
    let submission = validate(lead)?;
    print_json(&serde_json::to_value(&submission)?)
}

async fn run_submit(cli: &CliContext, lead: LeadArgs, variant: Variant) -> Result<(), CliError> {
    let submission = validate(lead)?;
    let request = SubmitLeadRequest::new(&submission, variant);

    let response = cli.http()?.post(cli.url(LEADS_ENDPOINT)).json(&request).send().await?;
    let status = response.status().as_u16();
    let body = response.json::<SubmitLeadResponse>().await.ok();

    interpret_response(status, body)?;
    println!("submitted ({variant})");
    Ok(())
}

fn validate(lead: LeadArgs) -> Result<LeadSubmission, CliError> {
    lead.into_form().validate().map_err(CliError::Invalid)
}

fn interpret_response(status: u16, body: Option<SubmitLeadResponse>) -> Result<(), CliError> {
    match body {
        Some(body) if body.ok && (200..300).contains(&status) => Ok(()),
        Some(body) if !body.errors.is_empty() => Err(CliError::Rejected(body.validation_errors())),
        Some(body) => Err(CliError::ServerError {
            status,
            message: body.message.unwrap_or_else(|| "no message".to_owned()),
        }),
        None if (200..300).contains(&status) => Ok(()),
        None => Err(CliError::ServerError { status, message: "unreadable response body".to_owned() }),
    }
}

fn print_field_errors(errors: &ValidationErrors) {
    for error in errors {
        eprintln!("  {:<13} {}", field_flag(error.field), error.message());
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Command-line flag that sets `field`.
fn field_flag(field: Field) -> &'static str {
    match field {
        Field::FirstName => "--first-name",
        Field::LastName => "--last-name",
        Field::Phone => "--phone",
        Field::Email => "--email",
        Field::DateOfBirth => "--dob",
        Field::State => "--state",
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
