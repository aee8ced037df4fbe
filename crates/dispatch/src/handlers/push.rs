use std::sync::Arc;

use async_trait::async_trait;
use webhook::{CanonicalEvent, MessageRelay, OutboundMessage};

use super::deliver;
use crate::registry::{EventHandler, HandlerError};

/// Label carried by every push notification.
pub const PUSH_EVENT_LABEL: &str = "New commit";

/// Reports a push with the head commit message.
pub struct PushHandler {
    relay: Arc<dyn MessageRelay>,
}

impl PushHandler {
    pub fn new(relay: Arc<dyn MessageRelay>) -> Self {
        Self { relay }
    }

    pub fn message(event: &CanonicalEvent) -> OutboundMessage {
        OutboundMessage::for_event(PUSH_EVENT_LABEL, event.commit_message(), event)
    }
}

#[async_trait]
impl EventHandler for PushHandler {
    async fn handle(&self, event: &CanonicalEvent) -> Result<(), HandlerError> {
        tracing::debug!(
            branch = %event.branch(),
            commits = event.commit_count(),
            "Handling push"
        );
        deliver(self.relay.as_ref(), &Self::message(event)).await;
        Ok(())
    }
}
