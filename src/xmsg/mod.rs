/*!
# Xmsg Module

This module implements the lifecycle core for cross-chain messages (xmsgs),
providing the message entity, its status state machine, and the per-field
validation rules.

## Core Components

### Message Entity
The `Xmsg` record tracks one logical cross-chain transfer:
- Inbound observation parameters
- One or two outbound execution attempts
- Lifecycle status with audit message
- Deterministic content-derived index

### Status State Machine
The status system handles:
- Guarded lifecycle transitions
- Forced-abort convergence on illegal requests
- Block-time stamping supplied by the caller
- Terminal state detection

### Validation Rules
Field validation covers:
- Sender and receiver presence
- Chain id resolution against the registry
- Index length and format
- Outbound list shape

## Architecture

The lifecycle follows a fixed flow:

1. **Creation**
   ```text
   InboundVote -> Xmsg::from_inbound_vote -> PendingInbound
   ```
   The index is computed from signer-independent vote content, so every
   validator observing the same event derives the same record identity.

2. **Outbound Recording**
   ```text
   OutboundResult -> add_outbound_result (facts only)
   caller         -> set_outbound_mined / set_pending_revert / ...
   ```
   Recording observed facts and deciding the next lifecycle state are
   separate calls.

3. **Reversal**
   ```text
   add_revert_outbound -> second outbound entry toward the source chain
   ```
   The outbound list is append-only; the superseded attempt stays in the
   record as the audit trail.

## Integration

The module integrates with:
1. The chain registry (id resolution during validation)
2. The ballot subsystem (consumed as a finalization outcome)
3. The rate limiter (schedules pending xmsgs by destination chain)
*/

pub mod error;
pub mod events;
pub mod index;
pub mod status;
pub mod types;
pub mod validation;

pub use error::{ErrorSeverity, XmsgError};
pub use events::InboundPellEvent;
pub use index::{inbound_vote_index, XMSG_INDEX_LENGTH};
pub use status::{valid_transition, Status, XmsgStatus};
pub use types::{
    BallotStatus, InboundTxParams, InboundVote, OutboundResult, OutboundTxParams,
    TxFinalizationStatus, Xmsg,
};
