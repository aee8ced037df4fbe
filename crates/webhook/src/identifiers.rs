//! Newtype identifiers.
//!
//! Every concept with an identity is a distinct newtype wrapping a primitive.
//! This keeps a [`ChatId`] from being passed where a [`ThreadId`] is expected,
//! even though both are `i64` on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for i64-wrapped newtypes (chat platform integers, may be negative).
// Generates: struct (Copy, Default = 0), new(), as_i64(), Display.
// ---------------------------------------------------------------------------
macro_rules! i64_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier from a raw integer.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value.
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — chat-platform-integer-backed
// ---------------------------------------------------------------------------

i64_id! {
    /// Identifies the chat a notification is delivered to.
    ///
    /// Group chats use negative identifiers. Zero means "not routed"; the
    /// receiving side decides what to do with it.
    ChatId
}

i64_id! {
    /// Identifies a forum thread (topic) within a chat. Zero means the main
    /// thread.
    ThreadId
}

// ---------------------------------------------------------------------------
// Identifiers — String-backed (transport-assigned)
// ---------------------------------------------------------------------------

string_id! {
    /// The webhook key taken from the inbound URL path
    /// (`/github-webhook/{webhook_id}`).
    ///
    /// Assigned by the transport layer; never part of the payload body.
    WebhookId
}

// ---------------------------------------------------------------------------
// Identifiers — delivery correlation
// ---------------------------------------------------------------------------

/// Correlates one inbound delivery across log lines and spans.
///
/// Taken from the provider's `X-GitHub-Delivery` header when present,
/// otherwise generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryId(String);

impl DeliveryId {
    /// Generates a new random delivery identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Uses the provider-supplied delivery header, falling back to a random
    /// identifier when the header is missing or blank.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self(v.to_string()),
            _ => Self::new_random(),
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
