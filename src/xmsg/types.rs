use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::error::XmsgError;
use super::events::InboundPellEvent;
use super::index::inbound_vote_index;
use super::status::{Status, XmsgStatus};

/// Finalization state of an outbound attempt
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TxFinalizationStatus {
    /// Observed but not yet settled on the destination chain
    #[default]
    NotFinalized,
    /// Settled; the entry is no longer the active outbound
    Executed,
}

/// Finalization outcome handed over by the ballot subsystem
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BallotStatus {
    Success,
    Failure,
}

/// Source-side observation data for an xmsg.
///
/// Immutable after creation except for `inbound_finalized_height`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundTxParams {
    pub sender: String,
    pub sender_chain_id: i64,
    pub tx_origin: String,
    pub inbound_tx_hash: String,
    pub inbound_tx_block_height: u64,
    /// Equal to the xmsg index by construction
    pub inbound_tx_ballot_index: String,
    pub inbound_tx_event_index: u64,
    pub inbound_finalized_height: u64,
    /// `None` means a plain value transfer
    pub inbound_pell_tx: Option<InboundPellEvent>,
}

/// Destination-side execution data for one outbound attempt
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundTxParams {
    pub receiver: String,
    pub receiver_chain_id: i64,
    pub outbound_tx_hash: String,
    pub outbound_tx_tss_nonce: u64,
    pub outbound_tx_gas_limit: u64,
    /// String-encoded unsigned integer
    pub outbound_tx_gas_price: String,
    pub tss_pubkey: String,
    pub tx_finalization_status: TxFinalizationStatus,
    pub outbound_tx_external_height: u64,
    pub outbound_tx_gas_used: u64,
    pub outbound_tx_effective_gas_price: U256,
    pub outbound_tx_effective_gas_limit: u64,
}

/// A finalized inbound observation, as delivered by the ballot subsystem
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundVote {
    /// Address that submitted the vote; record provenance only
    pub signer: String,
    pub sender: String,
    pub sender_chain_id: i64,
    pub receiver: String,
    pub receiver_chain_id: i64,
    pub inbound_tx_hash: String,
    pub inbound_block_height: u64,
    pub gas_limit: u64,
    pub event_index: u64,
    /// Defaults to `sender` when blank
    pub tx_origin: String,
    pub inbound_pell_tx: Option<InboundPellEvent>,
}

/// Observed facts of one outbound execution
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundResult {
    pub outbound_tx_hash: String,
    pub gas_used: u64,
    pub effective_gas_price: U256,
    pub effective_gas_limit: u64,
    pub external_height: u64,
    pub failure_reason: String,
}

/// One cross-chain message record.
///
/// Created exactly once from a finalized inbound vote, mutated in place by
/// block processing, never deleted. The outbound list is append-only and
/// always holds one or two entries: the original attempt, then the revert
/// attempt if one was ever needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Xmsg {
    /// Content-derived identifier, `0x` + 64 hex chars
    pub index: String,
    pub signer: String,
    pub inbound_tx_params: InboundTxParams,
    pub outbound_tx_params: Vec<OutboundTxParams>,
    pub status: Status,
}

impl Xmsg {
    /// Build a new record from a finalized inbound vote.
    ///
    /// Computes the deterministic index, builds the inbound params with the
    /// ballot index set to it, seeds a single outbound entry toward the
    /// intended receiver (nonce 0, not finalized), and validates the whole
    /// record. On a validation failure the error is returned unchanged and
    /// no entity is produced.
    pub fn from_inbound_vote(
        vote: &InboundVote,
        tss_pubkey: &str,
        block_timestamp: i64,
    ) -> Result<Self, XmsgError> {
        let index = inbound_vote_index(vote);

        let tx_origin = if vote.tx_origin.is_empty() {
            vote.sender.clone()
        } else {
            vote.tx_origin.clone()
        };

        let inbound = InboundTxParams {
            sender: vote.sender.clone(),
            sender_chain_id: vote.sender_chain_id,
            tx_origin,
            inbound_tx_hash: vote.inbound_tx_hash.clone(),
            inbound_tx_block_height: vote.inbound_block_height,
            inbound_tx_ballot_index: index.clone(),
            inbound_tx_event_index: vote.event_index,
            inbound_finalized_height: 0,
            inbound_pell_tx: vote.inbound_pell_tx.clone(),
        };

        let outbound = OutboundTxParams {
            receiver: vote.receiver.clone(),
            receiver_chain_id: vote.receiver_chain_id,
            outbound_tx_tss_nonce: 0,
            outbound_tx_gas_limit: vote.gas_limit,
            tss_pubkey: tss_pubkey.to_string(),
            tx_finalization_status: TxFinalizationStatus::NotFinalized,
            ..Default::default()
        };

        let xmsg = Self {
            index,
            signer: vote.signer.clone(),
            inbound_tx_params: inbound,
            outbound_tx_params: vec![outbound],
            status: Status::new(XmsgStatus::PendingInbound, block_timestamp),
        };
        xmsg.validate()?;
        Ok(xmsg)
    }

    /// The single active outbound attempt: the last list entry, which is the
    /// revert once one exists. Zero-valued for a record that has not been
    /// outbound-initialized.
    pub fn current_outbound_param(&self) -> OutboundTxParams {
        self.outbound_tx_params.last().cloned().unwrap_or_default()
    }

    /// True iff the active outbound is the revert attempt
    pub fn is_current_outbound_revert(&self) -> bool {
        self.outbound_tx_params.len() == 2
    }

    /// Receiver chain of the original attempt, or `-1` before any outbound
    /// has been attempted
    pub fn original_destination_chain_id(&self) -> i64 {
        match self.outbound_tx_params.first() {
            Some(params) => params.receiver_chain_id,
            None => -1,
        }
    }

    /// Record the observed execution facts on the current outbound entry.
    ///
    /// Only copies observations; deciding the next lifecycle state is the
    /// caller's separate `set_*` call. Success and failure ballots currently
    /// record the same fields.
    pub fn add_outbound_result(
        &mut self,
        result: &OutboundResult,
        _ballot_status: BallotStatus,
        block_timestamp: i64,
    ) {
        if let Some(current) = self.outbound_tx_params.last_mut() {
            current.outbound_tx_hash = result.outbound_tx_hash.clone();
            current.outbound_tx_gas_used = result.gas_used;
            current.outbound_tx_effective_gas_price = result.effective_gas_price;
            current.outbound_tx_effective_gas_limit = result.effective_gas_limit;
            current.outbound_tx_external_height = result.external_height;
        }
        self.status.status_message = result.failure_reason.clone();
        self.status.last_update_timestamp = block_timestamp;
    }

    /// Append the revert attempt sending value back toward the original
    /// sender, and mark the superseded attempt as executed.
    ///
    /// The list never shrinks and never exceeds two entries; a second revert
    /// is rejected, as is reverting a record with no outbound at all.
    pub fn add_revert_outbound(&mut self, gas_limit: u64) -> Result<(), XmsgError> {
        if self.is_current_outbound_revert() {
            return Err(XmsgError::AlreadyReverting);
        }
        let Some(original) = self.outbound_tx_params.last_mut() else {
            return Err(XmsgError::NoOutboundYet);
        };
        original.tx_finalization_status = TxFinalizationStatus::Executed;
        let tss_pubkey = original.tss_pubkey.clone();

        let revert = OutboundTxParams {
            receiver: self.inbound_tx_params.sender.clone(),
            receiver_chain_id: self.inbound_tx_params.sender_chain_id,
            outbound_tx_gas_limit: gas_limit,
            tss_pubkey,
            tx_finalization_status: TxFinalizationStatus::NotFinalized,
            ..Default::default()
        };
        self.outbound_tx_params.push(revert);
        Ok(())
    }

    /// Inbound params are frozen at creation except for the finalized height
    pub fn set_inbound_finalized_height(&mut self, height: u64) {
        self.inbound_tx_params.inbound_finalized_height = height;
    }

    pub fn set_abort(&mut self, message: &str) {
        self.status.change_status(XmsgStatus::Aborted, message);
    }

    pub fn set_pending_revert(&mut self, message: &str) {
        self.status.change_status(XmsgStatus::PendingRevert, message);
    }

    pub fn set_pending_outbound(&mut self, message: &str) {
        self.status.change_status(XmsgStatus::PendingOutbound, message);
    }

    pub fn set_outbound_mined(&mut self, message: &str) {
        self.status.change_status(XmsgStatus::OutboundMined, message);
    }

    pub fn set_reverted(&mut self, message: &str) {
        self.status.change_status(XmsgStatus::Reverted, message);
    }
}

impl fmt::Display for Xmsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.index, self.status.status)
    }
}
