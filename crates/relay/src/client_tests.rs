use super::*;

#[test]
fn defaults_target_local_relay_with_five_second_bound() {
    let relay = GrpcRelay::default();
    assert_eq!(relay.address(), "localhost:50051");
    assert_eq!(relay.timeout(), Duration::from_secs(5));
}

#[test]
fn with_timeout_overrides_bound() {
    let relay = GrpcRelay::new("relay.internal:9000").with_timeout(Duration::from_millis(250));
    assert_eq!(relay.address(), "relay.internal:9000");
    assert_eq!(relay.timeout(), Duration::from_millis(250));
}

#[tokio::test]
async fn malformed_address_is_rejected_before_connecting() {
    let err = send("not a host", &OutboundMessage::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::InvalidAddress { .. }), "{err}");
    assert_eq!(err.address(), "not a host");
}

#[test]
fn error_chain_includes_sources() {
    #[derive(Debug)]
    struct Wrapper(std::io::Error);
    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("transport error")
        }
    }
    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }
    let wrapped = Wrapper(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "refused",
    ));
    assert_eq!(error_chain(&wrapped), "transport error: refused");
}
