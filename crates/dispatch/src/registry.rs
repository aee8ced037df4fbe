//! Event-type keyed handler registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;
use webhook::{CanonicalEvent, DeliveryError, MessageRelay};

use crate::handlers::{IssuesHandler, PullRequestHandler, PushHandler, ReleaseHandler};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure reported by an [`EventHandler`].
///
/// The default handlers never return one: relay failures are logged and
/// swallowed. The type exists for handlers that need to reject an event.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Event rejected: {reason}")]
    Rejected { reason: String },

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("No handler registered for event type '{event_type}'")]
    UnregisteredEventType { event_type: String },

    #[error("Handler failed: {0}")]
    Handler(#[from] HandlerError),
}

// ---------------------------------------------------------------------------
// Handler trait
// ---------------------------------------------------------------------------

/// Processes one decoded webhook event.
///
/// Implementations are stored as `Arc<dyn EventHandler>` and may be invoked
/// concurrently from many request tasks.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &CanonicalEvent) -> Result<(), HandlerError>;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Maps event-type keys to handlers.
///
/// Populated once at startup, then shared read-only behind an `Arc`. There is
/// no removal; registering a key twice keeps the last handler.
#[derive(Default, Clone)]
pub struct DispatchRegistry {
    handlers: HashMap<String, Arc<dyn EventHandler>>,
}

impl DispatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock handlers, all delivering through `relay`.
    ///
    /// | Key | Handler |
    /// |-----|---------|
    /// | `push` | [`PushHandler`] |
    /// | `issues`, `issue_comment` | [`IssuesHandler`] |
    /// | `pull_request` | [`PullRequestHandler`] |
    /// | `release` | [`ReleaseHandler`] |
    pub fn with_default_handlers(relay: Arc<dyn MessageRelay>) -> Self {
        let issues: Arc<dyn EventHandler> = Arc::new(IssuesHandler::new(Arc::clone(&relay)));

        let mut registry = Self::new();
        registry.register("push", Arc::new(PushHandler::new(Arc::clone(&relay))));
        registry.register("issues", Arc::clone(&issues));
        registry.register("issue_comment", issues);
        registry.register(
            "pull_request",
            Arc::new(PullRequestHandler::new(Arc::clone(&relay))),
        );
        registry.register("release", Arc::new(ReleaseHandler::new(relay)));
        registry
    }

    /// Stores `handler` under `event_type`, replacing any previous entry.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        if self.handlers.insert(event_type.clone(), handler).is_some() {
            tracing::debug!(event_type = %event_type, "Replaced existing handler");
        }
    }

    /// Invokes the handler registered for `event_type` and returns its result.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnregisteredEventType`] if nothing is registered
    ///   under `event_type`.
    /// - [`DispatchError::Handler`] if the handler fails.
    pub async fn dispatch(
        &self,
        event_type: &str,
        event: &CanonicalEvent,
    ) -> Result<(), DispatchError> {
        let handler = self.handlers.get(event_type).ok_or_else(|| {
            DispatchError::UnregisteredEventType {
                event_type: event_type.to_string(),
            }
        })?;

        let span = tracing::info_span!(
            "dispatch",
            event_type = %event_type,
            webhook_id = event.id.as_ref().map_or("", |id| id.as_str()),
        );

        async {
            tracing::debug!(summary = %event, "Dispatching event");
            handler.handle(event).await.map_err(DispatchError::from)
        }
        .instrument(span)
        .await
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.handlers.contains_key(event_type)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered keys in sorted order.
    pub fn event_types(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl std::fmt::Debug for DispatchRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchRegistry")
            .field("event_types", &self.event_types())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
