//! Stock handlers: one per GitHub event kind GitTracker reports.
//!
//! Each handler derives an [`OutboundMessage`] from the event and makes a
//! single delivery attempt. Delivery failures are logged at `warn` and do not
//! fail the handler: the webhook sender cannot act on them.

use webhook::{MessageRelay, OutboundMessage};

mod issues;
mod pull_request;
mod push;
mod release;

pub use issues::IssuesHandler;
pub use pull_request::PullRequestHandler;
pub use push::PushHandler;
pub use release::ReleaseHandler;

/// Sends `message` once, logging instead of propagating a failure.
async fn deliver(relay: &dyn MessageRelay, message: &OutboundMessage) {
    match relay.send(message).await {
        Ok(()) => tracing::info!(
            event = %message.event,
            repository = %message.rep_name,
            address = %relay.address(),
            "Notification delivered"
        ),
        Err(e) => tracing::warn!(
            event = %message.event,
            repository = %message.rep_name,
            address = %e.address(),
            error = %e,
            "Notification delivery failed"
        ),
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
