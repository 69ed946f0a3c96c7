//! Logging subsystem built on `tracing-subscriber`.

pub mod manager;
pub mod service;
pub mod types;

pub use manager::{init, LogGuard};
pub use service::{init_logging_from_config, LoggingInitConfig};
pub use types::{FileLoggingConfig, LoggerConfig, StderrConfig};

/// Formats a service name with an optional label suffix.
pub fn format_service_name(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_service_name() {
        assert_eq!(format_service_name("unl-report", None), "unl-report");
        assert_eq!(
            format_service_name("unl-report", Some("dev")),
            "unl-report%dev"
        );
    }
}
