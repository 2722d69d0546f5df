use anyhow::{Context, Result};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber: pretty console output filtered by `RUST_LOG`,
/// an optional daily JSON file log and an optional OpenTelemetry log bridge.
pub fn init_logger(
    sdk_logger_provider: Option<SdkLoggerProvider>,
    component: &str,
    is_dev: bool,
    enable_file: bool,
) -> Result<()> {
    let file_layer = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(format!("rust_app_{component}"))
            .filename_suffix("log")
            .build(log_dir)
            .with_context(|| format!("Failed to create log file appender in {log_dir}"))?;
        let (file_writer, guard) = non_blocking(file_appender);

        // the writer thread must outlive main
        std::mem::forget(guard);

        Some(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new("info")),
        )
    } else {
        None
    };

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter);

    let otel_layer = sdk_logger_provider
        .as_ref()
        .map(|provider| OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter()));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn otel_filter() -> EnvFilter {
    ["hyper", "opentelemetry", "tonic", "h2", "reqwest"]
        .iter()
        .fold(EnvFilter::new("info"), |filter, target| {
            match format!("{target}=off").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
}
