use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Warning - operation can continue
    Warning,
    /// Error - the triggering transaction is rejected
    Error,
    /// Critical - the record itself is malformed
    Critical,
}

/// Xmsg lifecycle and validation errors
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum XmsgError {
    #[error("sender cannot be empty")]
    EmptySender,

    #[error("receiver cannot be empty")]
    EmptyReceiver,

    #[error("chain id {0} not found in registry")]
    UnknownChain(i64),

    #[error("invalid index length {got}, want {want}")]
    InvalidIndexLength { got: usize, want: usize },

    #[error("outbound tx params cannot be empty")]
    MissingOutboundParams,

    #[error("outbound tx params cannot exceed 2 entries, got {0}")]
    TooManyOutboundParams(usize),

    #[error("cannot revert a revert tx")]
    AlreadyReverting,

    #[error("cannot revert before trying to process an outbound tx")]
    NoOutboundYet,
}

impl XmsgError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            XmsgError::EmptySender => ErrorSeverity::Error,
            XmsgError::EmptyReceiver => ErrorSeverity::Error,
            XmsgError::UnknownChain(_) => ErrorSeverity::Error,
            XmsgError::InvalidIndexLength { .. } => ErrorSeverity::Critical,
            XmsgError::MissingOutboundParams => ErrorSeverity::Critical,
            XmsgError::TooManyOutboundParams(_) => ErrorSeverity::Critical,
            XmsgError::AlreadyReverting => ErrorSeverity::Error,
            XmsgError::NoOutboundYet => ErrorSeverity::Error,
        }
    }
}
