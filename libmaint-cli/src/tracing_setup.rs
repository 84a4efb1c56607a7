//! Logging for the libmaint server
//!
//! Without `RUST_LOG`, the filter covers the binary, the server library and
//! the `tower_http` request spans; sqlx is held at `warn` so per-query
//! statements stay out of the log unless asked for.
//!
//!   libmaint --debug serve                        # debug for libmaint targets
//!   RUST_LOG=libmaint_server::db=debug libmaint serve
//!   libmaint --otel serve                         # OTLP export (telemetry feature)
//!
//! OTLP export reads `OTEL_EXPORTER_OTLP_ENDPOINT` (default
//! http://localhost:4317) and `OTEL_SERVICE_NAME` (default libmaint).

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_TARGETS: [&str; 3] = ["libmaint", "libmaint_server", "tower_http"];

/// Logging options from the global CLI flags
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

/// Filter directives used when `RUST_LOG` is unset.
fn default_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    let mut directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    directives.push("sqlx=warn".to_string());
    directives.join(",")
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config.debug)))
}

/// Install the global subscriber: compact console output, plus OTLP export
/// when `--otel` is set and the `telemetry` feature is built in.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(console);

    #[cfg(feature = "telemetry")]
    if config.otel {
        let (tracer, endpoint) = otel::tracer()?;
        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()
            .map_err(|err| anyhow!(err))?;
        tracing::info!(endpoint = %endpoint, "exporting traces over OTLP");
        return Ok(());
    }

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        eprintln!("warning: --otel requires the `telemetry` feature; logging to console only");
    }

    registry.try_init().map_err(|err| anyhow!(err))
}

/// Flush pending spans before exit.
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(feature = "telemetry")]
mod otel {
    use anyhow::{anyhow, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::{Tracer, TracerProvider};

    /// OTLP-backed tracer and the endpoint it exports to.
    pub(super) fn tracer() -> Result<(Tracer, String)> {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4317".to_string());
        let service_name =
            std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "libmaint".to_string());

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint)
            .build()
            .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
                "service.name",
                service_name,
            )]))
            .build();

        let tracer = provider.tracer("libmaint-server");
        // The global provider keeps the batch exporter alive until shutdown()
        let _ = opentelemetry::global::set_tracer_provider(provider);

        Ok((tracer, endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_request_spans() {
        assert_eq!(
            default_directives(false),
            "libmaint=info,libmaint_server=info,tower_http=info,sqlx=warn"
        );
    }

    #[test]
    fn debug_raises_libmaint_targets_only() {
        let directives = default_directives(true);
        assert!(directives.contains("libmaint_server=debug"));
        assert!(directives.contains("tower_http=debug"));
        assert!(directives.ends_with("sqlx=warn"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
