use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lifecycle states of a cross-chain message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum XmsgStatus {
    /// Inbound observation finalized, outbound not yet scheduled
    PendingInbound,
    /// Outbound dispatch scheduled on the destination chain
    PendingOutbound,
    /// Original outbound failed, revert dispatch scheduled
    PendingRevert,
    /// Outbound executed and mined on the destination chain
    OutboundMined,
    /// Funds returned toward the original sender
    Reverted,
    /// Terminal failure state
    Aborted,
}

impl XmsgStatus {
    /// All lifecycle states, in declaration order
    pub const ALL: [XmsgStatus; 6] = [
        XmsgStatus::PendingInbound,
        XmsgStatus::PendingOutbound,
        XmsgStatus::PendingRevert,
        XmsgStatus::OutboundMined,
        XmsgStatus::Reverted,
        XmsgStatus::Aborted,
    ];

    /// Terminal states are permanent archival records
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            XmsgStatus::OutboundMined | XmsgStatus::Reverted | XmsgStatus::Aborted
        )
    }

    pub fn is_pending(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for XmsgStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmsgStatus::PendingInbound => write!(f, "pending_inbound"),
            XmsgStatus::PendingOutbound => write!(f, "pending_outbound"),
            XmsgStatus::PendingRevert => write!(f, "pending_revert"),
            XmsgStatus::OutboundMined => write!(f, "outbound_mined"),
            XmsgStatus::Reverted => write!(f, "reverted"),
            XmsgStatus::Aborted => write!(f, "aborted"),
        }
    }
}

/// Allowed transitions, constructed once at first use
static TRANSITIONS: Lazy<HashMap<XmsgStatus, Vec<XmsgStatus>>> = Lazy::new(|| {
    use XmsgStatus::*;

    HashMap::from([
        (
            PendingInbound,
            vec![PendingOutbound, Aborted, OutboundMined, PendingRevert],
        ),
        (
            PendingOutbound,
            vec![Aborted, PendingRevert, OutboundMined, Reverted],
        ),
        (PendingRevert, vec![Aborted, OutboundMined, Reverted]),
        (OutboundMined, vec![]),
        (Reverted, vec![]),
        (Aborted, vec![]),
    ])
});

/// Whether `old -> new` is in the transition table
pub fn valid_transition(old: XmsgStatus, new: XmsgStatus) -> bool {
    TRANSITIONS
        .get(&old)
        .is_some_and(|next| next.contains(&new))
}

/// Lifecycle status of an xmsg: state, free-text audit message, and the
/// block time of the last mutation.
///
/// Timestamps are block time supplied by the caller, never wall-clock, so
/// every replica records the same value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub status: XmsgStatus,
    pub status_message: String,
    pub last_update_timestamp: i64,
}

impl Status {
    pub fn new(status: XmsgStatus, block_timestamp: i64) -> Self {
        Self {
            status,
            status_message: String::new(),
            last_update_timestamp: block_timestamp,
        }
    }

    /// Move to `new_status`, accumulating `message` into the audit message.
    ///
    /// A non-empty `message` is appended (joined with `" : "`) before the
    /// transition is evaluated, so it survives even a rejected request.
    ///
    /// A request not in the transition table never fails: the record is
    /// forced to the terminal `Aborted` state and the audit message is
    /// replaced with a diagnostic recording the attempted transition. The
    /// caller runs inside a replicated state-transition function, so every
    /// request must have exactly one deterministic, non-fatal outcome.
    pub fn change_status(&mut self, new_status: XmsgStatus, message: &str) {
        if !message.is_empty() {
            if self.status_message.is_empty() {
                self.status_message = message.to_string();
            } else {
                self.status_message = format!("{} : {}", self.status_message, message);
            }
        }

        if !valid_transition(self.status, new_status) {
            warn!(
                old = %self.status,
                new = %new_status,
                "illegal status transition request, forcing abort"
            );
            self.status_message = format!(
                "Failed to transition status from {} to {}: {}",
                self.status, new_status, message
            );
            self.status = XmsgStatus::Aborted;
            return;
        }

        self.status = new_status;
    }
}
