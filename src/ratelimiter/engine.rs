use primitive_types::U256;
use tracing::debug;

use crate::xmsg::Xmsg;

use super::types::{RateLimiterFlags, RateLimiterInput, RateLimiterOutput};

/// A limiter configuration gates scheduling only when fully specified:
/// enabled, positive window, and a present, non-zero rate. Anything else
/// disables limiting and the caller falls back to unrestricted scheduling.
pub fn is_usable(flags: &RateLimiterFlags) -> bool {
    flags.enabled && flags.window > 0 && flags.rate.is_some_and(|rate| !rate.is_zero())
}

/// Evaluate the sliding-window withdraw limit for one block.
///
/// The caller guarantees `window > 0` via [`is_usable`]. All arithmetic is
/// 256-bit integer math and the rate division truncates toward zero.
pub fn apply(input: &RateLimiterInput, window: i64, rate: U256) -> RateLimiterOutput {
    let block_limit = rate;
    let window_limit = block_limit * U256::from(window as u64);

    let mut effective_window = window;
    let mut effective_limit = window_limit;

    // Messages waiting longer than the nominal window widen it to the actual
    // backlog span; the rate must be evaluated over the real waiting period
    // or the limiter under-counts the backlog and lets a burst through.
    if input.lowest_pending_xmsg_height != 0 {
        let pending_span = input.height - input.lowest_pending_xmsg_height + 1;
        if pending_span > window {
            effective_window = pending_span;
            effective_limit = block_limit * U256::from(pending_span as u64);
        }
    }

    let total_value = input.past_xmsgs_value + input.pending_xmsgs_value;
    let exceeded = total_value > effective_limit;

    let mut output = RateLimiterOutput {
        current_withdraw_window: effective_window,
        current_withdraw_rate: total_value / U256::from(effective_window as u64),
        rate_limit_exceeded: exceeded,
        ..Default::default()
    };

    // Missed messages are already past their deadline and are never held
    // back, whatever the windowed total says.
    for xmsg in &input.xmsgs_missed {
        schedule(&mut output, xmsg);
    }

    if exceeded {
        debug!(
            %total_value,
            %effective_limit,
            window = effective_window,
            "withdraw rate limit exceeded, holding pending xmsgs"
        );
    } else {
        for xmsg in &input.xmsgs_pending {
            schedule(&mut output, xmsg);
        }
    }

    output
}

fn schedule(output: &mut RateLimiterOutput, xmsg: &Xmsg) {
    let chain_id = xmsg.current_outbound_param().receiver_chain_id;
    output
        .xmsgs_map
        .entry(chain_id)
        .or_default()
        .push(xmsg.clone());
}
