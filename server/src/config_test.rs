use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("LEAD_WEBHOOK_URL");
        std::env::remove_var("LEAD_WEBHOOK_TIMEOUT_SECS");
        std::env::remove_var("LEAD_WEBHOOK_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("TRUST_PROXY_HEADERS");
    }
}

#[test]
fn from_env_defaults_without_webhook() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.webhook.is_none());
    assert!(!cfg.trust_proxy_headers);
}

#[test]
fn trust_proxy_headers_is_opt_in() {
    unsafe {
        clear_server_env();
        std::env::set_var("TRUST_PROXY_HEADERS", "True");
    }
    assert!(ServerConfig::from_env().unwrap().trust_proxy_headers);

    unsafe { std::env::set_var("TRUST_PROXY_HEADERS", "0") };
    assert!(!ServerConfig::from_env().unwrap().trust_proxy_headers);

    unsafe { std::env::set_var("TRUST_PROXY_HEADERS", "maybe") };
    assert_eq!(
        ServerConfig::from_env(),
        Err(ConfigError::InvalidValue { var: "TRUST_PROXY_HEADERS", value: "maybe".into() })
    );

    unsafe { clear_server_env() };
}

#[test]
fn from_env_parses_webhook_and_timeouts() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("LEAD_WEBHOOK_URL", "https://hooks.example.test/catch/123");
        std::env::set_var("LEAD_WEBHOOK_TIMEOUT_SECS", "30");
        std::env::set_var("LEAD_WEBHOOK_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    let webhook = cfg.webhook.unwrap();
    assert_eq!(webhook.url.as_str(), "https://hooks.example.test/catch/123");
    assert_eq!(webhook.timeouts, WebhookTimeouts { request_secs: 30, connect_secs: 2 });
    assert_eq!(webhook.timeouts.request(), Duration::from_secs(30));

    unsafe { clear_server_env() };
}

#[test]
fn blank_webhook_url_means_log_only() {
    unsafe {
        clear_server_env();
        std::env::set_var("LEAD_WEBHOOK_URL", "   ");
    }

    assert!(ServerConfig::from_env().unwrap().webhook.is_none());

    unsafe { clear_server_env() };
}

#[test]
fn malformed_port_is_an_error() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(
        ServerConfig::from_env(),
        Err(ConfigError::InvalidValue { var: "PORT", value: "eighty".into() })
    );

    unsafe { clear_server_env() };
}

#[test]
fn webhook_url_must_be_http() {
    assert!(matches!(parse_webhook_url("ftp://example.test/drop"), Err(ConfigError::InvalidWebhookUrl(_))));
    assert!(matches!(parse_webhook_url("not a url"), Err(ConfigError::InvalidWebhookUrl(_))));
    assert!(parse_webhook_url(" http://localhost:9000/hook ").is_ok());
}
