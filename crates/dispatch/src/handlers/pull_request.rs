use std::sync::Arc;

use async_trait::async_trait;
use webhook::{CanonicalEvent, MessageRelay, OutboundMessage};

use super::deliver;
use crate::registry::{EventHandler, HandlerError};

/// Reports pull request activity as `PR #n: title`, the branch pair, and
/// the pull request URL.
pub struct PullRequestHandler {
    relay: Arc<dyn MessageRelay>,
}

impl PullRequestHandler {
    pub fn new(relay: Arc<dyn MessageRelay>) -> Self {
        Self { relay }
    }

    pub fn message(event: &CanonicalEvent) -> OutboundMessage {
        let comment = format!(
            "PR #{}: {}\n{} -> {}\n{}",
            event.pull_request_number(),
            event.pull_request_title(),
            event.pull_request_head_branch(),
            event.pull_request_base_branch(),
            event.pull_request_url(),
        );
        OutboundMessage::for_event(format!("pull_request_{}", event.action), comment, event)
    }
}

#[async_trait]
impl EventHandler for PullRequestHandler {
    async fn handle(&self, event: &CanonicalEvent) -> Result<(), HandlerError> {
        tracing::debug!(
            pull_request = event.pull_request_number(),
            action = %event.action,
            "Handling pull request event"
        );
        deliver(self.relay.as_ref(), &Self::message(event)).await;
        Ok(())
    }
}
