//! Batched retrieval of UNLReports from a ledger node.
//!
//! [`UnlReportReader`] walks flag ledgers from a starting ledger index in either direction,
//! fetches their ledgers in bounded concurrent batches and parses each into an [`UnlReport`].
//!
//! [`UnlReport`]: unl_report_types::UnlReport

mod error;
mod reader;
mod traversal;

pub use error::ReaderError;
pub use reader::UnlReportReader;
pub use traversal::{covering_flag, flag_sequence, step, ScanDirection};
