use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default value for `request_timeout_ms` in [`ClientConfig`].
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default value for `async_batch_limit` in [`ReaderConfig`].
const DEFAULT_ASYNC_BATCH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC endpoint of the ledger node, `http://` or `https://`.
    pub rpc_url: String,

    /// Per-request timeout in ms.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Maximum number of ledger requests in flight at once. Must be at least 1.
    #[serde(default = "default_async_batch_limit")]
    pub async_batch_limit: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            async_batch_limit: DEFAULT_ASYNC_BATCH_LIMIT,
        }
    }
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_async_batch_limit() -> usize {
    DEFAULT_ASYNC_BATCH_LIMIT
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Service label to append to the service name (e.g., "prod", "dev").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_label: Option<String>,

    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub client: ClientConfig,

    #[serde(default)]
    pub reader: ReaderConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Config with defaults everywhere except the node endpoint.
    pub fn with_rpc_url(rpc_url: impl Into<String>) -> Self {
        Self {
            client: ClientConfig::new(rpc_url),
            reader: ReaderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
