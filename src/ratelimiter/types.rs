use std::collections::HashMap;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::xmsg::Xmsg;

/// Governance-controlled limiter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimiterFlags {
    pub enabled: bool,
    /// Nominal sliding window, in blocks
    pub window: i64,
    /// Value cap per block; a missing or zero rate disables limiting
    pub rate: Option<U256>,
}

/// Per-block snapshot assembled by the relayer scheduler
#[derive(Debug, Clone, Default)]
pub struct RateLimiterInput {
    /// Current block height
    pub height: i64,
    /// Unresolved xmsgs older than the lookback window
    pub xmsgs_missed: Vec<Xmsg>,
    /// Unresolved xmsgs within the window
    pub xmsgs_pending: Vec<Xmsg>,
    /// Aggregate value of resolved xmsgs within the window
    pub past_xmsgs_value: U256,
    /// Aggregate value of the pending xmsgs
    pub pending_xmsgs_value: U256,
    /// Lowest block height among the pending xmsgs, 0 when none
    pub lowest_pending_xmsg_height: i64,
}

/// Scheduling decision for one block
#[derive(Debug, Clone, Default)]
pub struct RateLimiterOutput {
    /// Destination chain id -> xmsgs released for dispatch this block
    pub xmsgs_map: HashMap<i64, Vec<Xmsg>>,
    /// Window the rate was evaluated over
    pub current_withdraw_window: i64,
    /// Withdrawn value per block over the effective window
    pub current_withdraw_rate: U256,
    pub rate_limit_exceeded: bool,
}
