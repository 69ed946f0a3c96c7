//! Logging initialization.

use std::io;

use tracing::*;
use tracing_appender::{non_blocking::WorkerGuard, rolling::RollingFileAppender};
use tracing_subscriber::{fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use super::types::LoggerConfig;

/// Keeps the background file writer alive. Buffered lines are flushed on drop.
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initializes the logging subsystem with the provided config.
///
/// The filter defaults to INFO and can be overridden through `RUST_LOG`.
pub fn init(config: LoggerConfig) -> LogGuard {
    let filt = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let stderr_sub = if config.stderr_config.json_format {
        layer()
            .json()
            .with_writer(io::stderr)
            .with_span_events(config.stderr_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(io::stderr)
            .with_span_events(config.stderr_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    };

    let mut file_guard = None;
    let file_layer = config.file_logging_config.as_ref().map(|file_config| {
        let file_appender = RollingFileAppender::new(
            file_config.rotation.clone(),
            &file_config.directory,
            &file_config.file_name_prefix,
        );
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        file_guard = Some(guard);

        if file_config.json_format {
            layer()
                .json()
                .with_writer(writer)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(writer)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        }
    });

    tracing_subscriber::registry()
        .with(stderr_sub)
        .with(file_layer)
        .init();

    debug!(
        service_name = %config.service_name,
        service_version = ?config.service_version,
        "logging initialized"
    );

    LogGuard {
        _file_guard: file_guard,
    }
}
