//! Dispatch registry and event handlers for GitTracker.
//!
//! The [`DispatchRegistry`] maps an event-type key (GitHub's `X-GitHub-Event`
//! header value) to an [`EventHandler`]. Handlers turn a
//! [`webhook::CanonicalEvent`] into a [`webhook::OutboundMessage`] and hand
//! it to a [`webhook::MessageRelay`].
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Handlers sequence calls between the event model in
//! the [`webhook`] crate and the relay port. They contain no transport code;
//! the relay implementation is injected.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`registry`] | [`DispatchRegistry`], [`EventHandler`], error types |
//! | [`handlers`] | [`PushHandler`], [`IssuesHandler`], [`PullRequestHandler`], [`ReleaseHandler`] |

pub mod handlers;
pub mod registry;

pub use handlers::{IssuesHandler, PullRequestHandler, PushHandler, ReleaseHandler};
pub use registry::{DispatchError, DispatchRegistry, EventHandler, HandlerError};
