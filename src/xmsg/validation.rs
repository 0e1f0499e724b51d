use crate::chains;

use super::error::XmsgError;
use super::index::XMSG_INDEX_LENGTH;
use super::types::{InboundTxParams, OutboundTxParams, Xmsg};

/// Validate the source-side parameter set
pub fn validate_inbound_params(params: &InboundTxParams) -> Result<(), XmsgError> {
    if params.sender.is_empty() {
        return Err(XmsgError::EmptySender);
    }
    if chains::lookup_by_id(params.sender_chain_id).is_none() {
        return Err(XmsgError::UnknownChain(params.sender_chain_id));
    }
    Ok(())
}

/// Validate one destination-side parameter set
pub fn validate_outbound_params(params: &OutboundTxParams) -> Result<(), XmsgError> {
    if params.receiver.is_empty() {
        return Err(XmsgError::EmptyReceiver);
    }
    if chains::lookup_by_id(params.receiver_chain_id).is_none() {
        return Err(XmsgError::UnknownChain(params.receiver_chain_id));
    }
    Ok(())
}

/// An index is the `0x`-prefixed hex rendering of a 32-byte digest
pub fn validate_index(index: &str) -> Result<(), XmsgError> {
    if index.len() != XMSG_INDEX_LENGTH {
        return Err(XmsgError::InvalidIndexLength {
            got: index.len(),
            want: XMSG_INDEX_LENGTH,
        });
    }
    Ok(())
}

impl Xmsg {
    /// Run every field validation; the first failure is returned, none are
    /// aggregated.
    pub fn validate(&self) -> Result<(), XmsgError> {
        if self.outbound_tx_params.is_empty() {
            return Err(XmsgError::MissingOutboundParams);
        }
        if self.outbound_tx_params.len() > 2 {
            return Err(XmsgError::TooManyOutboundParams(
                self.outbound_tx_params.len(),
            ));
        }
        validate_index(&self.index)?;
        validate_inbound_params(&self.inbound_tx_params)?;
        for outbound in &self.outbound_tx_params {
            validate_outbound_params(outbound)?;
        }
        Ok(())
    }
}
