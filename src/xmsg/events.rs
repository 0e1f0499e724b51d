use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Cross-chain event carried by an inbound observation.
///
/// The set of kinds is closed: an observation either carries one of these
/// payloads or none at all, and `None` on the inbound params means a plain
/// value transfer. The payload participates in the index digest, so two
/// observations differing only in event kind are distinct xmsgs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum InboundPellEvent {
    /// A staker deposited into a strategy on the source chain
    StakerDeposited {
        staker: String,
        token: String,
        strategy: String,
        shares: U256,
    },
    /// A staker delegated their shares to an operator
    StakerDelegated { staker: String, operator: String },
    /// A staker undelegated from an operator
    StakerUndelegated { staker: String, operator: String },
    /// A withdrawal entered the source-chain exit queue
    WithdrawalQueued {
        staker: String,
        withdrawer: String,
        nonce: u64,
        start_block: u64,
    },
    /// A queued withdrawal completed on the source chain
    WithdrawalCompleted {
        staker: String,
        withdrawer: String,
        nonce: u64,
    },
}

impl InboundPellEvent {
    /// Stable tag for the event kind, used in digests and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            InboundPellEvent::StakerDeposited { .. } => "staker_deposited",
            InboundPellEvent::StakerDelegated { .. } => "staker_delegated",
            InboundPellEvent::StakerUndelegated { .. } => "staker_undelegated",
            InboundPellEvent::WithdrawalQueued { .. } => "withdrawal_queued",
            InboundPellEvent::WithdrawalCompleted { .. } => "withdrawal_completed",
        }
    }
}
