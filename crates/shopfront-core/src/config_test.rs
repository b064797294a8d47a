use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SHOPFRONT_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert!(cfg.session_key.is_none());
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("SHOPFRONT_ENV", "production");
    map.insert("SHOPFRONT_API_BASE_URL", "https://shop.example.com/api");
    map.insert("SHOPFRONT_SESSION_KEY", "abc123");
    map.insert("SHOPFRONT_LOG_LEVEL", "debug");
    map.insert("SHOPFRONT_REQUEST_TIMEOUT_SECS", "5");
    map.insert("SHOPFRONT_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.api_base_url, "https://shop.example.com/api");
    assert_eq!(cfg.session_key.as_deref(), Some("abc123"));
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_log_level_defaults_follow_environment() {
    for (env, expected) in [("development", "debug"), ("test", "warn"), ("production", "info")] {
        let mut map = HashMap::new();
        map.insert("SHOPFRONT_ENV", env);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, expected, "default log level for {env}");
    }
}

#[test]
fn build_app_config_explicit_log_level_wins_over_environment() {
    let mut map = HashMap::new();
    map.insert("SHOPFRONT_ENV", "production");
    map.insert("SHOPFRONT_LOG_LEVEL", "trace");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "trace");
}

#[test]
fn build_app_config_treats_blank_session_key_as_absent() {
    let mut map = HashMap::new();
    map.insert("SHOPFRONT_SESSION_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.session_key.is_none());
}

#[test]
fn build_app_config_rejects_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("SHOPFRONT_API_BASE_URL", "/api");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_API_BASE_URL"),
        "expected InvalidEnvVar(SHOPFRONT_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("SHOPFRONT_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHOPFRONT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("SHOPFRONT_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPFRONT_REQUEST_TIMEOUT_SECS"
    ));
}

#[test]
fn app_config_debug_redacts_session_key() {
    let mut map = HashMap::new();
    map.insert("SHOPFRONT_SESSION_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("super-secret"), "debug leaked key: {debug}");
    assert!(debug.contains("[redacted]"));
}
