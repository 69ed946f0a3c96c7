//! Client side of the ledger node's JSON-RPC interface.

mod error;
mod rpc;
mod traits;

pub use error::LedgerClientError;
pub use rpc::{classify_ledger_result, RpcLedgerClient};
#[cfg(feature = "test-utils")]
pub use traits::MockLedgerClient;
pub use traits::{LedgerClient, LedgerRequest};
