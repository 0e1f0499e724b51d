use pretty_assertions::assert_eq;

use xmsg_core::xmsg::{
    validation::{validate_index, validate_inbound_params, validate_outbound_params},
    ErrorSeverity, OutboundTxParams, Xmsg, XmsgError, XMSG_INDEX_LENGTH,
};

use crate::common::{test_xmsg, ETH_MAINNET, PELL_MAINNET};

#[test]
fn test_valid_xmsg_passes() {
    assert_eq!(test_xmsg().validate(), Ok(()));
}

#[test]
fn test_index_length_rejected() {
    let mut xmsg = test_xmsg();
    xmsg.index = "0".into();
    assert_eq!(
        xmsg.validate(),
        Err(XmsgError::InvalidIndexLength {
            got: 1,
            want: XMSG_INDEX_LENGTH
        })
    );

    // One character short of the rendered digest length
    assert!(validate_index(&"0".repeat(65)).is_err());
    assert!(validate_index(&format!("0x{}", "a".repeat(64))).is_ok());
}

#[test]
fn test_outbound_count_rejected() {
    let mut xmsg = test_xmsg();
    let outbound = xmsg.current_outbound_param();
    xmsg.outbound_tx_params = vec![outbound.clone(), outbound.clone(), outbound];
    assert_eq!(xmsg.validate(), Err(XmsgError::TooManyOutboundParams(3)));
}

#[test]
fn test_empty_outbound_list_rejected() {
    let mut xmsg = test_xmsg();
    xmsg.outbound_tx_params = vec![];
    assert_eq!(xmsg.validate(), Err(XmsgError::MissingOutboundParams));
}

#[test]
fn test_inbound_rules() {
    let mut xmsg = test_xmsg();
    xmsg.inbound_tx_params.sender = String::new();
    assert_eq!(
        validate_inbound_params(&xmsg.inbound_tx_params),
        Err(XmsgError::EmptySender)
    );

    let mut xmsg = test_xmsg();
    xmsg.inbound_tx_params.sender_chain_id = 424_242;
    assert_eq!(
        validate_inbound_params(&xmsg.inbound_tx_params),
        Err(XmsgError::UnknownChain(424_242))
    );
}

#[test]
fn test_outbound_rules() {
    let outbound = OutboundTxParams {
        receiver_chain_id: ETH_MAINNET,
        ..Default::default()
    };
    assert_eq!(
        validate_outbound_params(&outbound),
        Err(XmsgError::EmptyReceiver)
    );

    let outbound = OutboundTxParams {
        receiver: "0x9f8e7d6c5b4a3f2e1d0c9b8a7f6e5d4c3b2a1f0e".into(),
        receiver_chain_id: 424_242,
        ..Default::default()
    };
    assert_eq!(
        validate_outbound_params(&outbound),
        Err(XmsgError::UnknownChain(424_242))
    );
}

// Every outbound entry is validated, not just the active one
#[test]
fn test_revert_entry_validated() {
    let mut xmsg = test_xmsg();
    xmsg.add_revert_outbound(300_000).unwrap();
    assert_eq!(xmsg.validate(), Ok(()));

    xmsg.outbound_tx_params[1].receiver = String::new();
    assert_eq!(xmsg.validate(), Err(XmsgError::EmptyReceiver));
}

// The first failure wins; nothing is aggregated
#[test]
fn test_first_failure_returned() {
    let mut xmsg = test_xmsg();
    xmsg.index = "0".into();
    xmsg.inbound_tx_params.sender = String::new();
    assert_eq!(
        xmsg.validate(),
        Err(XmsgError::InvalidIndexLength {
            got: 1,
            want: XMSG_INDEX_LENGTH
        })
    );
}

#[test]
fn test_error_severity() {
    // A malformed record is worse than a rejectable transaction
    assert_eq!(
        XmsgError::InvalidIndexLength { got: 1, want: 66 }.severity(),
        ErrorSeverity::Critical
    );
    assert_eq!(XmsgError::TooManyOutboundParams(3).severity(), ErrorSeverity::Critical);
    assert_eq!(XmsgError::EmptySender.severity(), ErrorSeverity::Error);
    assert_eq!(XmsgError::AlreadyReverting.severity(), ErrorSeverity::Error);

    let err: xmsg_core::Error = XmsgError::EmptySender.into();
    assert!(!err.is_retryable());
    assert_eq!(err.to_string(), "Xmsg error: sender cannot be empty");
}

// The persisted record must survive a serde round trip unchanged
#[test]
fn test_xmsg_serde_round_trip() {
    let mut xmsg = test_xmsg();
    xmsg.add_revert_outbound(300_000).unwrap();
    xmsg.set_pending_revert("gas too low");

    let encoded = serde_json::to_string(&xmsg).unwrap();
    let decoded: Xmsg = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, xmsg);
    assert_eq!(decoded.original_destination_chain_id(), PELL_MAINNET);
}
