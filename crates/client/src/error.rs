use thiserror::Error;

/// Node-side error code for a ledger the node does not have.
pub(crate) const LEDGER_NOT_FOUND_CODE: &str = "lgrNotFound";

/// Errors that can occur when fetching a ledger from a node.
///
/// [`LedgerNotFound`](Self::LedgerNotFound) is the only variant that describes the data rather
/// than a failure: the node has no such ledger, either because it is past the chain head or
/// outside the node's retained history.
#[derive(Debug, Error)]
pub enum LedgerClientError {
    /// The node reported that the requested ledger does not exist.
    #[error("ledger {0} not found")]
    LedgerNotFound(u64),

    /// The node answered with an error status.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The request did not complete (connection, timeout, transport).
    #[error("network error: {0}")]
    Network(String),

    /// The node answered with something that is not a ledger.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl LedgerClientError {
    /// Creates an RPC error.
    pub fn rpc(msg: impl Into<String>) -> Self {
        Self::Rpc(msg.into())
    }

    /// Creates a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Returns true if the node does not have the requested ledger.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LedgerNotFound(_))
    }
}
