//! Ledger payload as returned by the `ledger` method with expanded transactions.
//!
//! Only the parts needed to recover UNLReport data are modeled. Every field the parser walks
//! is optional or defaulted and decoded leniently, so a ledger lacking the expected shape, or
//! carrying wrongly typed fields, still decodes and simply yields no report data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validator::ActiveValidatorItem;

/// `TransactionType` of the pseudo-transaction that publishes a UNLReport.
pub const UNL_REPORT_TX_TYPE: &str = "UNLReport";

/// `LedgerEntryType` of the ledger object holding the UNLReport.
pub const UNL_REPORT_ENTRY_TYPE: &str = "UNLReport";

/// One ledger with its transactions, in ledger order.
///
/// Transactions that are not expanded objects are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerPayload {
    #[serde(
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ledger_hash: Option<String>,

    #[serde(default, deserialize_with = "crate::lenient::vec")]
    pub transactions: Vec<LedgerTransaction>,
}

/// An expanded transaction together with its metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    #[serde(
        rename = "TransactionType",
        default,
        deserialize_with = "crate::lenient::or_default"
    )]
    pub transaction_type: String,

    /// Marks the report transaction that carries the consolidated validator set.
    #[serde(
        rename = "ActiveValidator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub active_validator: Option<Value>,

    #[serde(
        rename = "ImportVLKey",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub import_vl_key: Option<ImportVlKey>,

    #[serde(
        rename = "metaData",
        alias = "meta",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub meta: Option<TransactionMeta>,
}

impl LedgerTransaction {
    pub fn is_unl_report(&self) -> bool {
        self.transaction_type == UNL_REPORT_TX_TYPE
    }

    pub fn has_active_validator(&self) -> bool {
        self.active_validator.is_some()
    }

    /// Affected nodes from the metadata, empty if there is no metadata.
    pub fn affected_nodes(&self) -> &[AffectedNode] {
        self.meta
            .as_ref()
            .map(|meta| meta.affected_nodes.as_slice())
            .unwrap_or_default()
    }
}

/// Imported validator list key carried by a report transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportVlKey {
    #[serde(
        rename = "PublicKey",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_key: Option<String>,

    #[serde(
        rename = "Account",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionMeta {
    #[serde(
        rename = "AffectedNodes",
        default,
        deserialize_with = "crate::lenient::vec"
    )]
    pub affected_nodes: Vec<AffectedNode>,
}

/// One entry of `AffectedNodes`.
///
/// On the wire this is an object with exactly one key naming the kind of mutation. Deleted
/// nodes are not relevant to reports and are left undecoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffectedNode {
    #[serde(
        rename = "ModifiedNode",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified: Option<ModifiedNode>,

    #[serde(
        rename = "CreatedNode",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<CreatedNode>,

    #[serde(rename = "DeletedNode", default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Value>,
}

/// Borrowed view of the state snapshot a node mutation leaves behind.
#[derive(Debug, Clone, Copy)]
pub enum NodeMutation<'a> {
    Modified(&'a ModifiedNode),
    Created(&'a CreatedNode),
}

impl<'a> NodeMutation<'a> {
    pub fn ledger_entry_type(&self) -> &'a str {
        match *self {
            NodeMutation::Modified(node) => &node.ledger_entry_type,
            NodeMutation::Created(node) => &node.ledger_entry_type,
        }
    }

    /// Final fields of a modification, new fields of a creation.
    pub fn fields(&self) -> Option<&'a UnlReportFields> {
        match *self {
            NodeMutation::Modified(node) => node.final_fields.as_ref(),
            NodeMutation::Created(node) => node.new_fields.as_ref(),
        }
    }
}

impl AffectedNode {
    /// The modification or creation carried by this node, if any.
    pub fn mutation(&self) -> Option<NodeMutation<'_>> {
        if let Some(node) = &self.modified {
            return Some(NodeMutation::Modified(node));
        }
        self.created.as_ref().map(NodeMutation::Created)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifiedNode {
    #[serde(
        rename = "LedgerEntryType",
        default,
        deserialize_with = "crate::lenient::or_default"
    )]
    pub ledger_entry_type: String,

    #[serde(
        rename = "FinalFields",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub final_fields: Option<UnlReportFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedNode {
    #[serde(
        rename = "LedgerEntryType",
        default,
        deserialize_with = "crate::lenient::or_default"
    )]
    pub ledger_entry_type: String,

    #[serde(
        rename = "NewFields",
        default,
        deserialize_with = "crate::lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_fields: Option<UnlReportFields>,
}

/// Fields of a UNLReport ledger entry snapshot.
///
/// A list that is not an array decodes as `None`; list elements of the wrong shape are
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlReportFields {
    #[serde(
        rename = "ActiveValidators",
        default,
        deserialize_with = "crate::lenient::option_vec",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_validators: Option<Vec<ActiveValidatorItem>>,

    #[serde(
        rename = "ImportVLKeys",
        default,
        deserialize_with = "crate::lenient::option_vec",
        skip_serializing_if = "Option::is_none"
    )]
    pub import_vl_keys: Option<Vec<Value>>,
}
