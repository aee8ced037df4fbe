//! gRPC client side of the relay.
//!
//! Each delivery opens its own channel, makes one `SendMessage` call, and
//! drops the channel before returning. There is no pooling and no retry.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::Endpoint;
use webhook::{DeliveryError, MessageRelay, OutboundMessage};

use crate::proto::{self, send_message_client::SendMessageClient};

/// Relay endpoint used by [`send_local`] and by default configuration.
pub const DEFAULT_ADDRESS: &str = "localhost:50051";

/// Upper bound on connect plus call for one delivery.
pub const RELAY_TIMEOUT: Duration = Duration::from_secs(5);

/// Delivers `message` to the relay at `address` (`host:port`).
///
/// # Errors
///
/// Returns [`DeliveryError`] if the address is malformed, the endpoint is
/// unreachable, the call fails, or the whole exchange exceeds
/// [`RELAY_TIMEOUT`].
pub async fn send(address: &str, message: &OutboundMessage) -> Result<(), DeliveryError> {
    send_within(address, message, RELAY_TIMEOUT).await
}

/// [`send`] to [`DEFAULT_ADDRESS`].
///
/// # Errors
///
/// See [`send`].
pub async fn send_local(message: &OutboundMessage) -> Result<(), DeliveryError> {
    send(DEFAULT_ADDRESS, message).await
}

async fn send_within(
    address: &str,
    message: &OutboundMessage,
    timeout: Duration,
) -> Result<(), DeliveryError> {
    match tokio::time::timeout(timeout, call(address, message, timeout)).await {
        Ok(result) => result,
        Err(_) => Err(DeliveryError::Timeout {
            address: address.to_string(),
            timeout,
        }),
    }
}

async fn call(
    address: &str,
    message: &OutboundMessage,
    timeout: Duration,
) -> Result<(), DeliveryError> {
    let endpoint = Endpoint::from_shared(format!("http://{address}"))
        .map_err(|e| DeliveryError::InvalidAddress {
            address: address.to_string(),
            message: error_chain(&e),
        })?
        .connect_timeout(timeout)
        .timeout(timeout);

    let channel = endpoint
        .connect()
        .await
        .map_err(|e| DeliveryError::Connect {
            address: address.to_string(),
            message: error_chain(&e),
        })?;

    let mut client = SendMessageClient::new(channel);
    client
        .send_message(proto::Message::from(message))
        .await
        .map_err(|status| DeliveryError::Call {
            address: address.to_string(),
            message: status.to_string(),
        })?;

    tracing::debug!(address = %address, event = %message.event, "Relay call acknowledged");
    Ok(())
}

/// Joins an error with its sources; tonic's transport errors only say
/// "transport error" at the top level.
fn error_chain(error: &dyn StdError) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

// ---------------------------------------------------------------------------
// MessageRelay adapter
// ---------------------------------------------------------------------------

/// [`MessageRelay`] over gRPC for a fixed address.
#[derive(Debug, Clone)]
pub struct GrpcRelay {
    address: String,
    timeout: Duration,
}

impl GrpcRelay {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            timeout: RELAY_TIMEOUT,
        }
    }

    /// Overrides [`RELAY_TIMEOUT`] for this relay.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for GrpcRelay {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

#[async_trait]
impl MessageRelay for GrpcRelay {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        send_within(&self.address, message, self.timeout).await
    }

    fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
