use std::time::Duration;

use async_trait::async_trait;
use jsonrpsee::{
    core::{client::ClientT, params::ArrayParams, ClientError},
    http_client::{HttpClient, HttpClientBuilder},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};
use unl_report_config::ClientConfig;
use unl_report_types::LedgerPayload;

use crate::{
    error::LEDGER_NOT_FOUND_CODE,
    traits::{LedgerClient, LedgerRequest},
    LedgerClientError,
};

const LEDGER_METHOD: &str = "ledger";

const SUCCESS_STATUS: &str = "success";

/// JSON-RPC client for a ledger node reachable over HTTP(S).
#[derive(Debug, Clone)]
pub struct RpcLedgerClient {
    client: HttpClient,
}

impl RpcLedgerClient {
    /// Creates a new [`RpcLedgerClient`] for the endpoint in `config`.
    pub fn try_new(config: &ClientConfig) -> Result<Self, LedgerClientError> {
        let url = config.rpc_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(LedgerClientError::rpc(format!(
                "unsupported ledger RPC scheme: {url}"
            )));
        }

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_millis(config.request_timeout_ms))
            .build(url)
            .map_err(|e| LedgerClientError::rpc(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn get_ledger(&self, ledger_index: u64) -> Result<LedgerPayload, LedgerClientError> {
        let mut params = ArrayParams::new();
        params
            .insert(LedgerRequest::with_transactions(ledger_index))
            .map_err(|e| LedgerClientError::malformed(e.to_string()))?;

        trace!(%ledger_index, "requesting ledger");
        let result = self
            .client
            .request::<Value, _>(LEDGER_METHOD, params)
            .await
            .map_err(|e| map_client_error(ledger_index, e))
            .and_then(|result| classify_ledger_result(ledger_index, result));

        if let Err(err) = &result {
            debug!(%ledger_index, %err, "ledger request failed");
        }
        result
    }
}

fn map_client_error(ledger_index: u64, err: ClientError) -> LedgerClientError {
    match err {
        ClientError::Call(obj) if obj.message() == LEDGER_NOT_FOUND_CODE => {
            LedgerClientError::LedgerNotFound(ledger_index)
        }
        ClientError::Call(obj) => LedgerClientError::rpc(obj.message()),
        other => LedgerClientError::network(other.to_string()),
    }
}

/// The `result` object of a `ledger` call, before the ledger itself is decoded.
#[derive(Debug, Deserialize)]
struct LedgerResult {
    #[serde(default)]
    status: Option<String>,

    #[serde(default)]
    error: Option<String>,

    #[serde(default)]
    error_message: Option<String>,

    #[serde(default)]
    ledger: Option<Value>,
}

/// Interprets the `result` object returned by the node for a `ledger` call.
///
/// Nodes report failures inside a successful JSON-RPC response, as `status: "error"` plus an
/// `error` code. The `lgrNotFound` code maps to [`LedgerClientError::LedgerNotFound`].
pub fn classify_ledger_result(
    ledger_index: u64,
    result: Value,
) -> Result<LedgerPayload, LedgerClientError> {
    let result: LedgerResult =
        serde_json::from_value(result).map_err(|e| LedgerClientError::malformed(e.to_string()))?;

    if let Some(error) = result.error {
        if error == LEDGER_NOT_FOUND_CODE {
            return Err(LedgerClientError::LedgerNotFound(ledger_index));
        }
        let msg = match result.error_message {
            Some(message) => format!("{error}: {message}"),
            None => error,
        };
        return Err(LedgerClientError::Rpc(msg));
    }

    match result.status.as_deref() {
        Some(SUCCESS_STATUS) => {}
        Some(status) => {
            return Err(LedgerClientError::rpc(format!(
                "unexpected status: {status}"
            )))
        }
        None => return Err(LedgerClientError::malformed("missing status")),
    }

    let ledger = result
        .ledger
        .ok_or_else(|| LedgerClientError::malformed("missing ledger object"))?;
    serde_json::from_value(ledger).map_err(|e| LedgerClientError::malformed(e.to_string()))
}
