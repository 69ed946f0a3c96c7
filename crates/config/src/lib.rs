//! Configuration for the UNL report reader and its command line tool.

mod config;
mod error;

pub use config::{ClientConfig, Config, LoggingConfig, ReaderConfig};
pub use error::ConfigError;
