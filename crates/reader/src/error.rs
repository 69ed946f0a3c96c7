use thiserror::Error;
use unl_report_client::LedgerClientError;

#[derive(Debug, Error)]
pub enum ReaderError {
    /// Rejected before any request was issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to fetch flag ledger {flag_ledger}: {source}")]
    Fetch {
        flag_ledger: u64,
        #[source]
        source: LedgerClientError,
    },
}

impl ReaderError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Flag ledger whose fetch failed, if any.
    pub fn flag_ledger(&self) -> Option<u64> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Fetch { flag_ledger, .. } => Some(*flag_ledger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ReaderError::Fetch {
            flag_ledger: 6_873_344,
            source: LedgerClientError::network("connection reset"),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch flag ledger 6873344: network error: connection reset"
        );
        assert_eq!(err.flag_ledger(), Some(6_873_344));

        let err = ReaderError::invalid_argument("count must be at least 1");
        assert_eq!(err.to_string(), "invalid argument: count must be at least 1");
        assert_eq!(err.flag_ledger(), None);
    }
}
