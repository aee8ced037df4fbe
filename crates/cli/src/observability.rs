//! `tracing` subscriber and optional OpenTelemetry export.
//!
//! Stdout always gets a fmt layer (JSON or pretty). When an OTLP endpoint is
//! configured, spans are also exported over gRPC through a batch processor.

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig as _;
use opentelemetry_sdk::trace::TracerProvider;
use opentelemetry_sdk::{runtime, Resource};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::{Config, LogFormat};

const SERVICE_NAME: &str = "gittracker";

/// Flushes and shuts down the tracer provider when dropped.
///
/// Keep it bound until the end of `main`.
pub struct OtelGuard {
    provider: Option<TracerProvider>,
}

impl Drop for OtelGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                tracing::warn!(error = %e, "OTel tracer provider shutdown error");
            }
        }
    }
}

/// Installs the global subscriber.
pub fn init(config: &Config) -> Result<OtelGuard> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("GITTRACKER_LOG '{}' is not a valid filter", config.log_filter))?;

    let fmt_layer = match config.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    let provider = config
        .otlp_endpoint
        .as_deref()
        .map(build_provider)
        .transpose()?;

    let otel_layer = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(SERVICE_NAME)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(endpoint) = &config.otlp_endpoint {
        tracing::info!(endpoint = %endpoint, "OTLP span export enabled");
    }

    Ok(OtelGuard { provider })
}

fn build_provider(endpoint: &str) -> Result<TracerProvider> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .context("failed to build OTLP span exporter")?;

    Ok(TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(Resource::new([
            KeyValue::new("service.name", SERVICE_NAME),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]))
        .build())
}
