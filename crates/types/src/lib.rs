//! Types shared between the ledger client, the report parser and the reader.

mod ledger;
mod lenient;
mod report;
mod validator;

pub use ledger::{
    AffectedNode, CreatedNode, ImportVlKey, LedgerPayload, LedgerTransaction, ModifiedNode,
    NodeMutation, TransactionMeta, UnlReportFields, UNL_REPORT_ENTRY_TYPE, UNL_REPORT_TX_TYPE,
};
pub use report::UnlReport;
pub use validator::{ActiveValidatorItem, ValidatorEntry};
