//! Port trait for the outbound notification relay.
//!
//! The `relay` crate implements it over gRPC; tests substitute recording or
//! failing implementations.

use async_trait::async_trait;

use crate::errors::DeliveryError;
use crate::message::OutboundMessage;

/// Delivers an [`OutboundMessage`] to a remote messaging endpoint.
///
/// One call is one attempt: implementations must not retry, and must return
/// within their configured timeout.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Sends `message`, returning once the remote side acknowledged it.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the endpoint is unreachable, rejects the
    /// call, or does not answer in time.
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;

    /// Address of the endpoint, for log context.
    fn address(&self) -> &str;
}
