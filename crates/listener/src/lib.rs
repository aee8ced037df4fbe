//! GitTracker trigger event source.
//!
//! Receives GitHub webhook deliveries over HTTP, decodes them into a
//! [`webhook::CanonicalEvent`], and hands them to a
//! [`dispatch::DispatchRegistry`] keyed by the `X-GitHub-Event` header.
//!
//! ## Route
//!
//! `POST /github-webhook/:webhook_id`
//!
//! | Condition | Response |
//! |-----------|----------|
//! | Method other than `POST` | 405 |
//! | `Content-Type` not `application/json` | 415 |
//! | `X-GitHub-Event` missing or empty | 400 |
//! | Body is not a decodable payload | 400 |
//! | Otherwise, including dispatch failures | 200 |
//!
//! Dispatch failures are logged, not reported: GitHub cannot do anything
//! useful with them and would only mark the hook as failing.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP framing and header checks live here. The
//! [`dispatch`] crate sees only decoded events.

pub mod error;
mod handler;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use dispatch::DispatchRegistry;
use tower_http::trace::TraceLayer;

pub use error::ListenerError;

/// Path of the webhook route, with the webhook key as its only parameter.
pub const WEBHOOK_ROUTE: &str = "/github-webhook/:webhook_id";

/// Header naming the event kind of a delivery.
pub const EVENT_HEADER: &str = "x-github-event";

/// Header carrying GitHub's unique delivery identifier.
pub const DELIVERY_HEADER: &str = "x-github-delivery";

/// Builds the webhook router over a populated registry.
pub fn router(registry: Arc<DispatchRegistry>) -> Router {
    Router::new()
        .route(WEBHOOK_ROUTE, post(handler::receive_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}
