//! The notification handed to the outbound relay.

use serde::{Deserialize, Serialize};

use crate::event::CanonicalEvent;
use crate::identifiers::{ChatId, ThreadId};

/// A chat notification derived from one [`CanonicalEvent`].
///
/// Built by a handler and passed by reference to a [`crate::MessageRelay`];
/// nothing mutates it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Short label for the kind of notification (e.g. `"New commit"`).
    pub event: String,
    /// Body text shown in the chat.
    pub comment: String,
    /// Target chat. Zero unless the caller routes the message explicitly.
    pub chat_id: ChatId,
    /// Target forum thread. Zero for the main thread.
    pub thread_id: ThreadId,
    pub author: String,
    pub author_url: String,
    pub rep_name: String,
    pub rep_url: String,
}

impl OutboundMessage {
    /// Builds a message with author and repository taken from `event`.
    ///
    /// Chat and thread are left at zero: the payload does not say where a
    /// notification should go.
    pub fn for_event(
        event_label: impl Into<String>,
        comment: impl Into<String>,
        event: &CanonicalEvent,
    ) -> Self {
        Self {
            event: event_label.into(),
            comment: comment.into(),
            chat_id: ChatId::default(),
            thread_id: ThreadId::default(),
            author: event.author_login().to_string(),
            author_url: event.author_url().to_string(),
            rep_name: event.repository_name().to_string(),
            rep_url: event.repository_url().to_string(),
        }
    }

    /// Returns the message routed to `chat_id` / `thread_id`.
    #[must_use]
    pub fn routed_to(mut self, chat_id: ChatId, thread_id: ThreadId) -> Self {
        self.chat_id = chat_id;
        self.thread_id = thread_id;
        self
    }
}
