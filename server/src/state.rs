//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the lead forwarder chosen at startup, the submission rate
//! limiter, and whether proxy headers identify the client. Nothing about
//! individual leads is retained here.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::services::sink::LeadForwarder;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<dyn LeadForwarder>,
    pub rate_limiter: RateLimiter,
    /// See [`crate::config::ServerConfig::trust_proxy_headers`].
    pub trust_proxy_headers: bool,
}

impl AppState {
    #[must_use]
    pub fn new(forwarder: Arc<dyn LeadForwarder>, rate_limiter: RateLimiter, trust_proxy_headers: bool) -> Self {
        Self { forwarder, rate_limiter, trust_proxy_headers }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use leads::WebhookPayload;

    use super::*;
    use crate::rate_limit::RateLimitConfig;
    use crate::services::sink::ForwardError;

    /// Forwarder that records payloads and answers with a fixed result.
    #[derive(Default)]
    pub struct RecordingForwarder {
        pub seen: Mutex<Vec<WebhookPayload>>,
        pub fail_with: Option<ForwardError>,
    }

    impl RecordingForwarder {
        #[must_use]
        pub fn failing(err: ForwardError) -> Self {
            Self { seen: Mutex::default(), fail_with: Some(err) }
        }

        pub fn count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LeadForwarder for RecordingForwarder {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn forward(&self, payload: &WebhookPayload) -> Result<(), ForwardError> {
            self.seen.lock().unwrap().push(payload.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    /// Create a test `AppState` around `forwarder` with default limits.
    #[must_use]
    pub fn test_app_state(forwarder: Arc<RecordingForwarder>) -> AppState {
        AppState::new(forwarder, RateLimiter::new(RateLimitConfig::default()), false)
    }

    /// Create a test `AppState` with a per-client limit of `per_client`.
    #[must_use]
    pub fn test_app_state_with_limit(forwarder: Arc<RecordingForwarder>, per_client: usize) -> AppState {
        let config = RateLimitConfig { per_client_limit: per_client, ..RateLimitConfig::default() };
        AppState::new(forwarder, RateLimiter::new(config), false)
    }

    /// Like [`test_app_state_with_limit`], but trusting proxy headers.
    #[must_use]
    pub fn test_app_state_behind_proxy(forwarder: Arc<RecordingForwarder>, per_client: usize) -> AppState {
        AppState { trust_proxy_headers: true, ..test_app_state_with_limit(forwarder, per_client) }
    }
}
