//! Error types shared across the GitTracker workspace.
//!
//! [`DecodeError`] is the only failure the event model itself can produce:
//! the body was not JSON, or a present field had the wrong type. Missing
//! sections are never an error.
//!
//! [`DeliveryError`] is produced by [`crate::MessageRelay`] implementations.
//! Handlers log it and move on; it never reaches the inbound caller.
//! Dispatch-level errors live in the `dispatch` crate.

use std::time::Duration;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// The inbound body could not be decoded into a [`crate::CanonicalEvent`].
#[derive(Debug, Error)]
#[error("Webhook payload could not be decoded: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

impl DecodeError {
    /// Line of the payload where decoding stopped (1-based).
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// Column of the payload where decoding stopped (1-based).
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

/// A notification could not be handed to the relay endpoint.
///
/// Every variant carries the target address so a log line is enough to tell
/// which endpoint was unreachable.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The endpoint address could not be turned into a connection target.
    #[error("Invalid relay address '{address}': {message}")]
    InvalidAddress {
        /// Address as configured.
        address: String,
        /// Parser diagnostic.
        message: String,
    },

    /// No connection could be established.
    #[error("Failed to connect to relay at {address}: {message}")]
    Connect {
        /// Address that was dialled.
        address: String,
        /// Underlying transport error text.
        message: String,
    },

    /// The connection was established but the call was rejected or failed.
    #[error("Relay call to {address} failed: {message}")]
    Call {
        /// Address that was called.
        address: String,
        /// Status text returned by the remote side or the transport.
        message: String,
    },

    /// Connect plus call did not finish within the configured bound.
    #[error("Relay call to {address} timed out after {timeout:?}")]
    Timeout {
        /// Address that was called.
        address: String,
        /// The bound that was exceeded.
        timeout: Duration,
    },
}

impl DeliveryError {
    /// Returns the relay address the failed delivery targeted.
    pub fn address(&self) -> &str {
        match self {
            Self::InvalidAddress { address, .. }
            | Self::Connect { address, .. }
            | Self::Call { address, .. }
            | Self::Timeout { address, .. } => address,
        }
    }
}
