use async_trait::async_trait;
use serde::Serialize;
use unl_report_types::LedgerPayload;

use crate::LedgerClientError;

/// Read access to ledgers held by a node.
#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetches the ledger at `ledger_index` with its transactions expanded.
    ///
    /// Fails with [`LedgerClientError::LedgerNotFound`] if the node does not have it.
    async fn get_ledger(&self, ledger_index: u64) -> Result<LedgerPayload, LedgerClientError>;
}

/// Parameters of the `ledger` method, asking for expanded transactions and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRequest {
    pub ledger_index: u64,
    pub full: bool,
    pub accounts: bool,
    pub transactions: bool,
    pub expand: bool,
    pub owner_funds: bool,
}

impl LedgerRequest {
    /// Request for one ledger with its transactions and their metadata inlined.
    pub fn with_transactions(ledger_index: u64) -> Self {
        Self {
            ledger_index,
            full: false,
            accounts: false,
            transactions: true,
            expand: true,
            owner_funds: false,
        }
    }
}
