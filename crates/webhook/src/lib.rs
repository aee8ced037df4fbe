//! Event domain for GitTracker.
//!
//! This crate contains the canonical webhook event model, the outbound
//! notification type, newtype identifiers, shared error types, and the
//! [`MessageRelay`] port trait. Infrastructure crates implement the trait
//! defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies.
//! It defines *what* a notification is; the `relay` crate defines *how* it
//! travels.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`event`] | [`CanonicalEvent`], [`EventKind`], field derivations |
//! | [`payload`] | Sub-records (`Repository`, `Issue`, `PullRequest`, ...) |
//! | [`message`] | [`OutboundMessage`] |
//! | [`identifiers`] | Newtype identifiers (`ChatId`, `WebhookId`, ...) |
//! | [`errors`] | [`DecodeError`], [`DeliveryError`] |
//! | [`relay`] | [`MessageRelay`] port trait |

pub mod errors;
pub mod event;
pub mod identifiers;
pub mod message;
pub mod payload;
pub mod relay;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{DecodeError, DeliveryError};
pub use event::{CanonicalEvent, EventKind};
pub use identifiers::{ChatId, DeliveryId, ThreadId, WebhookId};
pub use message::OutboundMessage;
pub use payload::{
    Comment, Commit, CommitAuthor, GitRef, Issue, Label, Owner, PullRequest, Release, Repository,
    Sender,
};
pub use relay::MessageRelay;
