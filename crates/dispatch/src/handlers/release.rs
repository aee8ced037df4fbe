use std::sync::Arc;

use async_trait::async_trait;
use webhook::{CanonicalEvent, MessageRelay, OutboundMessage};

use super::deliver;
use crate::registry::{EventHandler, HandlerError};

pub struct ReleaseHandler {
    relay: Arc<dyn MessageRelay>,
}

impl ReleaseHandler {
    pub fn new(relay: Arc<dyn MessageRelay>) -> Self {
        Self { relay }
    }

    pub fn message(event: &CanonicalEvent) -> OutboundMessage {
        let mut comment = format!("Release {}: {}", event.release_tag(), event.release_name());
        if event.is_prerelease() {
            comment.push_str(" (pre-release)");
        }
        comment.push('\n');
        comment.push_str(event.release_url());
        OutboundMessage::for_event(format!("release_{}", event.action), comment, event)
    }
}

#[async_trait]
impl EventHandler for ReleaseHandler {
    async fn handle(&self, event: &CanonicalEvent) -> Result<(), HandlerError> {
        tracing::debug!(
            tag = %event.release_tag(),
            action = %event.action,
            "Handling release event"
        );
        deliver(self.relay.as_ref(), &Self::message(event)).await;
        Ok(())
    }
}
