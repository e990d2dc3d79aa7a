//! Server configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Missing optional values fall back to defaults. Values that are present but
//! malformed (`PORT=abc`, a webhook URL that is not http(s)) are startup
//! errors so a misconfigured deploy fails fast instead of silently dropping
//! leads.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("invalid LEAD_WEBHOOK_URL: {0}")]
    InvalidWebhookUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl WebhookTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for WebhookTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_WEBHOOK_TIMEOUT_SECS, connect_secs: DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: reqwest::Url,
    pub timeouts: WebhookTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` means leads are logged instead of forwarded.
    pub webhook: Option<WebhookConfig>,
    /// Key rate limits on `X-Forwarded-For`/`X-Real-IP` instead of the peer
    /// address. Only safe behind a proxy that overwrites those headers.
    pub trust_proxy_headers: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEAD_WEBHOOK_URL`: http(s) endpoint receiving accepted leads
    /// - `LEAD_WEBHOOK_TIMEOUT_SECS`: default 10
    /// - `LEAD_WEBHOOK_CONNECT_TIMEOUT_SECS`: default 5
    /// - `TRUST_PROXY_HEADERS`: `true`/`false` (also `1`/`0`), default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse_strict("PORT", DEFAULT_PORT)?;
        let timeouts = WebhookTimeouts {
            request_secs: env_parse_strict("LEAD_WEBHOOK_TIMEOUT_SECS", DEFAULT_WEBHOOK_TIMEOUT_SECS)?,
            connect_secs: env_parse_strict("LEAD_WEBHOOK_CONNECT_TIMEOUT_SECS", DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS)?,
        };
        let webhook = std::env::var("LEAD_WEBHOOK_URL")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_webhook_url(&raw).map(|url| WebhookConfig { url, timeouts }))
            .transpose()?;

        let trust_proxy_headers = env_flag("TRUST_PROXY_HEADERS")?;

        Ok(Self { port, webhook, trust_proxy_headers })
    }
}

fn env_flag(var: &'static str) -> Result<bool, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::InvalidValue { var, value: raw }),
    }
}

fn env_parse_strict<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn parse_webhook_url(raw: &str) -> Result<reqwest::Url, ConfigError> {
    let url = reqwest::Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidWebhookUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidWebhookUrl(format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
