//! Wire types for the `hook.SendMessage` service.

use webhook::{ChatId, OutboundMessage, ThreadId};

/// `hook.Message`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Message {
    #[prost(string, tag = "1")]
    pub event: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub comment: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub chat_id: i64,
    #[prost(int64, tag = "4")]
    pub thread_id: i64,
    #[prost(string, tag = "5")]
    pub author: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub author_url: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub rep_name: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub rep_url: ::prost::alloc::string::String,
}

/// Wire-compatible with `google.protobuf.Empty`.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct Empty {}

impl From<&OutboundMessage> for Message {
    fn from(message: &OutboundMessage) -> Self {
        Self {
            event: message.event.clone(),
            comment: message.comment.clone(),
            chat_id: message.chat_id.as_i64(),
            thread_id: message.thread_id.as_i64(),
            author: message.author.clone(),
            author_url: message.author_url.clone(),
            rep_name: message.rep_name.clone(),
            rep_url: message.rep_url.clone(),
        }
    }
}

impl From<Message> for OutboundMessage {
    fn from(message: Message) -> Self {
        Self {
            event: message.event,
            comment: message.comment,
            chat_id: ChatId::new(message.chat_id),
            thread_id: ThreadId::new(message.thread_id),
            author: message.author,
            author_url: message.author_url,
            rep_name: message.rep_name,
            rep_url: message.rep_url,
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/hook.SendMessage.rs"));

#[cfg(test)]
#[path = "proto_tests.rs"]
mod tests;
