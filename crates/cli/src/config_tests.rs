use std::collections::HashMap;

use super::*;

fn load(vars: &[(&str, &str)]) -> Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = load(&[]).unwrap();

    assert_eq!(config.bind_address, "0.0.0.0:8080".parse().unwrap());
    assert_eq!(config.relay_address, "localhost:50051");
    assert_eq!(config.relay_timeout, Duration::from_secs(5));
    assert!(config.relay_stub_address.is_none());
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.otlp_endpoint.is_none());
}

#[test]
fn overrides_are_read() {
    let config = load(&[
        ("GITTRACKER_BIND_ADDRESS", "127.0.0.1:9000"),
        ("GITTRACKER_RELAY_ADDRESS", "bot.internal:50051"),
        ("GITTRACKER_RELAY_TIMEOUT_SECS", "2"),
        ("GITTRACKER_RELAY_STUB_ADDRESS", "127.0.0.1:50051"),
        ("GITTRACKER_LOG", "gittracker=debug,info"),
        ("GITTRACKER_LOG_FORMAT", "Pretty"),
        ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
    ])
    .unwrap();

    assert_eq!(config.bind_address, "127.0.0.1:9000".parse().unwrap());
    assert_eq!(config.relay_address, "bot.internal:50051");
    assert_eq!(config.relay_timeout, Duration::from_secs(2));
    assert_eq!(
        config.relay_stub_address,
        Some("127.0.0.1:50051".parse().unwrap())
    );
    assert_eq!(config.log_filter, "gittracker=debug,info");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(
        config.otlp_endpoint.as_deref(),
        Some("http://localhost:4317")
    );
}

#[test]
fn blank_values_count_as_unset() {
    let config = load(&[
        ("GITTRACKER_RELAY_ADDRESS", "  "),
        ("OTEL_EXPORTER_OTLP_ENDPOINT", ""),
    ])
    .unwrap();

    assert_eq!(config.relay_address, "localhost:50051");
    assert!(config.otlp_endpoint.is_none());
}

#[test]
fn zero_timeout_is_rejected() {
    let err = load(&[("GITTRACKER_RELAY_TIMEOUT_SECS", "0")]).unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let err = load(&[("GITTRACKER_RELAY_TIMEOUT_SECS", "five")]).unwrap_err();
    assert!(err.to_string().contains("GITTRACKER_RELAY_TIMEOUT_SECS"));
}

#[test]
fn unknown_log_format_is_rejected() {
    let err = load(&[("GITTRACKER_LOG_FORMAT", "xml")]).unwrap_err();
    assert!(err.to_string().contains("GITTRACKER_LOG_FORMAT"));
    assert!(format!("{err:#}").contains("unknown log format 'xml'"));
}

#[test]
fn invalid_bind_address_is_rejected() {
    assert!(load(&[("GITTRACKER_BIND_ADDRESS", "localhost")]).is_err());
}
