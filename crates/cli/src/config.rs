//! Runtime configuration.
//!
//! Loaded from environment variables (after `.env`, if present). Every
//! variable has a default; a value that is set but unparseable fails startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the stdout log layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => bail!("unknown log format '{other}' (expected 'json' or 'pretty')"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the webhook listener binds (`GITTRACKER_BIND_ADDRESS`).
    pub bind_address: SocketAddr,

    /// `host:port` of the chat bot's `SendMessage` service
    /// (`GITTRACKER_RELAY_ADDRESS`).
    pub relay_address: String,

    /// Bound on one relay delivery (`GITTRACKER_RELAY_TIMEOUT_SECS`).
    pub relay_timeout: Duration,

    /// When set, an in-process stub receiver listens here
    /// (`GITTRACKER_RELAY_STUB_ADDRESS`).
    pub relay_stub_address: Option<SocketAddr>,

    /// `EnvFilter` directive (`GITTRACKER_LOG`).
    pub log_filter: String,

    pub log_format: LogFormat,

    /// OTLP collector endpoint (`OTEL_EXPORTER_OTLP_ENDPOINT`). Export is off
    /// when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_address = var("GITTRACKER_BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into())
            .parse::<SocketAddr>()
            .context("GITTRACKER_BIND_ADDRESS must be a socket address (e.g. 0.0.0.0:8080)")?;

        let relay_timeout = match var("GITTRACKER_RELAY_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .context("GITTRACKER_RELAY_TIMEOUT_SECS must be a whole number of seconds")?;
                if secs == 0 {
                    bail!("GITTRACKER_RELAY_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => relay::RELAY_TIMEOUT,
        };

        let relay_stub_address = var("GITTRACKER_RELAY_STUB_ADDRESS")
            .map(|raw| raw.parse::<SocketAddr>())
            .transpose()
            .context("GITTRACKER_RELAY_STUB_ADDRESS must be a socket address (e.g. 127.0.0.1:50051)")?;

        let log_format = var("GITTRACKER_LOG_FORMAT")
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()
            .context("GITTRACKER_LOG_FORMAT is invalid")?
            .unwrap_or_default();

        Ok(Self {
            bind_address,
            relay_address: var("GITTRACKER_RELAY_ADDRESS")
                .unwrap_or_else(|| relay::DEFAULT_ADDRESS.into()),
            relay_timeout,
            relay_stub_address,
            log_filter: var("GITTRACKER_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            log_format,
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
