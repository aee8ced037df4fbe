use std::sync::Arc;

use async_trait::async_trait;
use webhook::{CanonicalEvent, MessageRelay, OutboundMessage};

use super::deliver;
use crate::registry::{EventHandler, HandlerError};

/// Reports issue and issue-comment activity.
///
/// Registered under both `issues` and `issue_comment`; the message label
/// tells the two apart.
pub struct IssuesHandler {
    relay: Arc<dyn MessageRelay>,
}

impl IssuesHandler {
    pub fn new(relay: Arc<dyn MessageRelay>) -> Self {
        Self { relay }
    }

    pub fn message(event: &CanonicalEvent) -> OutboundMessage {
        OutboundMessage::for_event(event.issue_event_type(), event.format_issue_message(), event)
    }
}

#[async_trait]
impl EventHandler for IssuesHandler {
    async fn handle(&self, event: &CanonicalEvent) -> Result<(), HandlerError> {
        tracing::debug!(
            issue = event.issue_number(),
            action = %event.action,
            "Handling issue event"
        );
        deliver(self.relay.as_ref(), &Self::message(event)).await;
        Ok(())
    }
}
