use pretty_assertions::assert_eq;
use primitive_types::U256;

use xmsg_core::xmsg::{
    BallotStatus, InboundTxParams, Status, TxFinalizationStatus, Xmsg, XmsgError, XmsgStatus,
};

use crate::common::{test_outbound_result, test_vote, test_xmsg, BLOCK_TIME, ETH_MAINNET};

/// A record whose outbound list was never initialized
fn uninitialized_xmsg() -> Xmsg {
    let vote = test_vote();
    Xmsg {
        index: "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060".into(),
        signer: vote.signer.clone(),
        inbound_tx_params: InboundTxParams {
            sender: vote.sender.clone(),
            sender_chain_id: vote.sender_chain_id,
            ..Default::default()
        },
        outbound_tx_params: vec![],
        status: Status::new(XmsgStatus::PendingInbound, BLOCK_TIME),
    }
}

#[test]
fn test_add_outbound_result_records_facts() {
    let mut xmsg = test_xmsg();
    let result = test_outbound_result("out of gas");

    xmsg.add_outbound_result(&result, BallotStatus::Failure, BLOCK_TIME + 60);

    let outbound = xmsg.current_outbound_param();
    assert_eq!(outbound.outbound_tx_hash, result.outbound_tx_hash);
    assert_eq!(outbound.outbound_tx_gas_used, result.gas_used);
    assert_eq!(
        outbound.outbound_tx_effective_gas_price,
        result.effective_gas_price
    );
    assert_eq!(
        outbound.outbound_tx_effective_gas_limit,
        result.effective_gas_limit
    );
    assert_eq!(outbound.outbound_tx_external_height, result.external_height);

    assert_eq!(xmsg.status.status_message, "out of gas");
    assert_eq!(xmsg.status.last_update_timestamp, BLOCK_TIME + 60);
    // Recording facts drives no lifecycle transition
    assert_eq!(xmsg.status.status, XmsgStatus::PendingInbound);
}

#[test]
fn test_add_outbound_result_same_fields_on_success() {
    let mut failed = test_xmsg();
    let mut succeeded = test_xmsg();
    let result = test_outbound_result("");

    failed.add_outbound_result(&result, BallotStatus::Failure, BLOCK_TIME + 60);
    succeeded.add_outbound_result(&result, BallotStatus::Success, BLOCK_TIME + 60);

    assert_eq!(failed, succeeded);
}

#[test]
fn test_add_revert_outbound() {
    let mut xmsg = test_xmsg();
    xmsg.add_revert_outbound(300_000).unwrap();

    assert_eq!(xmsg.outbound_tx_params.len(), 2);
    assert!(xmsg.is_current_outbound_revert());

    // The superseded attempt is closed out, not overwritten
    let original = &xmsg.outbound_tx_params[0];
    assert_eq!(
        original.tx_finalization_status,
        TxFinalizationStatus::Executed
    );

    // The revert sends value back toward the source
    let revert = xmsg.current_outbound_param();
    assert_eq!(revert.receiver, xmsg.inbound_tx_params.sender);
    assert_eq!(revert.receiver_chain_id, xmsg.inbound_tx_params.sender_chain_id);
    assert_eq!(revert.receiver_chain_id, ETH_MAINNET);
    assert_eq!(revert.outbound_tx_gas_limit, 300_000);
    assert_eq!(revert.tss_pubkey, original.tss_pubkey);
    assert_eq!(
        revert.tx_finalization_status,
        TxFinalizationStatus::NotFinalized
    );
    assert_eq!(revert.outbound_tx_hash, "");
    assert_eq!(revert.outbound_tx_effective_gas_price, U256::zero());
}

#[test]
fn test_revert_of_revert_rejected() {
    let mut xmsg = test_xmsg();
    xmsg.add_revert_outbound(300_000).unwrap();

    let before = xmsg.clone();
    let err = xmsg.add_revert_outbound(300_000).unwrap_err();
    assert_eq!(err, XmsgError::AlreadyReverting);
    assert_eq!(err.to_string(), "cannot revert a revert tx");
    // The entity is left unmodified on a sequencing error
    assert_eq!(xmsg, before);
}

#[test]
fn test_revert_without_outbound_rejected() {
    let mut xmsg = uninitialized_xmsg();

    let err = xmsg.add_revert_outbound(300_000).unwrap_err();
    assert_eq!(err, XmsgError::NoOutboundYet);
    assert_eq!(
        err.to_string(),
        "cannot revert before trying to process an outbound tx"
    );
    assert!(xmsg.outbound_tx_params.is_empty());
}

#[test]
fn test_current_outbound_param_defaults_when_empty() {
    let xmsg = uninitialized_xmsg();
    let outbound = xmsg.current_outbound_param();
    assert_eq!(outbound.receiver, "");
    assert_eq!(outbound.receiver_chain_id, 0);
    assert_eq!(outbound.outbound_tx_tss_nonce, 0);
    assert!(!xmsg.is_current_outbound_revert());
}

#[test]
fn test_original_destination_chain_id() {
    let xmsg = test_xmsg();
    let original_destination = xmsg.original_destination_chain_id();

    // The revert does not change where the message was originally headed
    let mut reverted = xmsg.clone();
    reverted.add_revert_outbound(300_000).unwrap();
    assert_eq!(reverted.original_destination_chain_id(), original_destination);

    assert_eq!(uninitialized_xmsg().original_destination_chain_id(), -1);
}

#[test]
fn test_set_inbound_finalized_height() {
    let mut xmsg = test_xmsg();
    xmsg.set_inbound_finalized_height(18_000_100);
    assert_eq!(xmsg.inbound_tx_params.inbound_finalized_height, 18_000_100);
}

#[test]
fn test_status_wrappers() {
    let mut xmsg = test_xmsg();
    xmsg.set_pending_outbound("scheduled");
    assert_eq!(xmsg.status.status, XmsgStatus::PendingOutbound);

    xmsg.set_outbound_mined("mined");
    assert_eq!(xmsg.status.status, XmsgStatus::OutboundMined);

    let mut xmsg = test_xmsg();
    xmsg.set_pending_revert("gas too low");
    assert_eq!(xmsg.status.status, XmsgStatus::PendingRevert);

    xmsg.set_reverted("funds returned");
    assert_eq!(xmsg.status.status, XmsgStatus::Reverted);

    let mut xmsg = test_xmsg();
    xmsg.set_abort("unsupported destination");
    assert_eq!(xmsg.status.status, XmsgStatus::Aborted);
}
