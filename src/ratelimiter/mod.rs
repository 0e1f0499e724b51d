/*!
# Rate Limiter Module

This module implements the sliding-window withdrawal rate limiter that gates
which pending outbound xmsgs may be scheduled for relay in a block.

## Core Components

### Limiter Flags
Governance-controlled configuration:
- Enabled switch
- Nominal window in blocks
- Per-block value rate

### Limiter Engine
A pure per-block function:
- Window widening over old backlogs
- Exact integer value arithmetic
- Per-destination-chain scheduling
- Missed-message delivery guarantee

## Architecture

Once per block the scheduler assembles a snapshot of missed and pending
xmsgs with their aggregate values and hands it to `apply`:

```text
RateLimiterInput -> apply(input, window, rate) -> RateLimiterOutput
```

Missed messages (older than the lookback window and still unresolved) are
always released: a message already past its deadline is never starved
further by throughput shaping. Pending messages are released only while the
windowed value total stays under the limit.

A misconfigured limiter is not an error. `is_usable` returning false tells
the caller to fall back to unrestricted scheduling, so a bad configuration
can never silently block legitimate traffic.

## Determinism

The engine runs inside a replicated state-transition function: all value
arithmetic is 256-bit integer math, division truncates toward zero, and no
clock or external state is read.
*/

mod engine;
mod types;

pub use engine::{apply, is_usable};
pub use types::{RateLimiterFlags, RateLimiterInput, RateLimiterOutput};
