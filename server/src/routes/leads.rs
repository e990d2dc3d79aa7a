//! Lead relay endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `POST /api/leads` is the only write path. The browser already validated
//! the form, but the handler re-runs the same `leads` rules before anything
//! leaves the process:
//!
//! 1. rate limit by client address → `429`
//! 2. re-validate → `422` with per-field errors
//! 3. forward to the configured sink → `200`, or `502` on sink failure

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, FromRef, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use leads::{SubmitLeadRequest, SubmitLeadResponse, WebhookPayload};
use time::OffsetDateTime;

use crate::state::AppState;

// =============================================================================
// CLIENT KEY
// =============================================================================

/// Rate limiting key for the caller: the socket peer address, else
/// `"unknown"`.
///
/// Caller-supplied headers are ignored unless `trust_proxy_headers` is set.
/// Then the right-most `X-Forwarded-For` hop (the one our proxy appended)
/// wins, followed by `X-Real-IP`, followed by the peer address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl ClientKey {
    fn from_parts(parts: &Parts, trust_proxy_headers: bool) -> Self {
        let forwarded = if trust_proxy_headers { forwarded_for(&parts.headers) } else { None };
        let key = forwarded
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_else(|| "unknown".to_owned());
        Self(key)
    }
}

impl<S> FromRequestParts<S> for ClientKey
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(Self::from_parts(parts, app_state.trust_proxy_headers))
    }
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let last_hop = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.rsplit(',').next());
    let real_ip = headers.get("x-real-ip").and_then(|v| v.to_str().ok());

    last_hop
        .into_iter()
        .chain(real_ip)
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_owned)
}

// =============================================================================
// HANDLER
// =============================================================================

type LeadReply = (StatusCode, Json<SubmitLeadResponse>);

pub async fn submit_lead(
    State(state): State<AppState>,
    ClientKey(client): ClientKey,
    body: Result<Json<SubmitLeadRequest>, JsonRejection>,
) -> LeadReply {
    if let Err(e) = state.rate_limiter.check_and_record(&client) {
        tracing::warn!(%client, error = %e, "lead submission rate limited");
        return reply(StatusCode::TOO_MANY_REQUESTS, SubmitLeadResponse::failed(e.to_string()));
    }

    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(%client, error = %rejection, "malformed lead body");
            return reply(rejection.status(), SubmitLeadResponse::failed(rejection.body_text()));
        }
    };

    let lead = match request.lead.validate() {
        Ok(lead) => lead,
        Err(errors) => {
            tracing::info!(%client, variant = %request.variant, fields = ?errors.fields(), "lead rejected");
            return reply(StatusCode::UNPROCESSABLE_ENTITY, SubmitLeadResponse::rejected(&errors));
        }
    };

    let payload = WebhookPayload::new(lead, request.variant, OffsetDateTime::now_utc());
    match state.forwarder.forward(&payload).await {
        Ok(()) => {
            tracing::info!(variant = %request.variant, sink = state.forwarder.name(), "lead forwarded");
            reply(StatusCode::OK, SubmitLeadResponse::accepted())
        }
        Err(e) => {
            tracing::error!(
                variant = %request.variant,
                sink = state.forwarder.name(),
                retryable = e.retryable(),
                error = %e,
                "lead forward failed"
            );
            reply(StatusCode::BAD_GATEWAY, SubmitLeadResponse::failed(forward_failure_message(e.retryable())))
        }
    }
}

fn reply(status: StatusCode, body: SubmitLeadResponse) -> LeadReply {
    (status, Json(body))
}

/// Visitor-facing text for a sink failure; webhook details stay in the log.
fn forward_failure_message(retryable: bool) -> &'static str {
    if retryable {
        "lead could not be delivered right now, please try again"
    } else {
        "lead could not be delivered"
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
