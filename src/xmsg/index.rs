use sha3::{Digest, Keccak256};

use super::types::InboundVote;

/// Length of a rendered xmsg index: `0x` plus 64 hex characters.
pub const XMSG_INDEX_LENGTH: usize = 66;

/// Deterministic identifier for an inbound observation.
///
/// The digest covers only signer-independent vote content: sender, sender
/// chain, receiver, receiver chain, inbound tx hash, gas limit, event index,
/// and the serialized event payload. The observing signer, the height the
/// vote is processed at, and the tx origin are excluded, so every validator
/// observing the same source-chain event derives the same index and their
/// votes converge on one ballot.
pub fn inbound_vote_index(vote: &InboundVote) -> String {
    // Kind tag plus payload: two events of different kinds can never
    // collide, and any payload change reshapes the digest.
    let event = vote
        .inbound_pell_tx
        .as_ref()
        .map(|event| {
            format!(
                "{}:{}",
                event.kind(),
                serde_json::to_string(event).unwrap_or_default()
            )
        })
        .unwrap_or_default();

    let preimage = format!(
        "{}-{}-{}-{}-{}-{}-{}-{}",
        vote.sender,
        vote.sender_chain_id,
        vote.receiver,
        vote.receiver_chain_id,
        vote.inbound_tx_hash,
        vote.gas_limit,
        vote.event_index,
        event,
    );

    format!("0x{}", hex::encode(Keccak256::digest(preimage.as_bytes())))
}
