//! Outbound relay adapter for GitTracker.
//!
//! Implements [`webhook::MessageRelay`] over gRPC: every notification is one
//! unary `hook.SendMessage/SendMessage` call over plaintext HTTP/2, bounded by
//! a fixed timeout that covers both connect and call.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Channel setup, wire encoding, and timeout handling live
//! here. The `dispatch` crate sees only [`webhook::MessageRelay`].
//!
//! ## Wire contract
//!
//! ```proto
//! package hook;
//!
//! service SendMessage {
//!   rpc SendMessage (Message) returns (google.protobuf.Empty);
//! }
//!
//! message Message {
//!   string event = 1;
//!   string comment = 2;
//!   int64 chat_id = 3;
//!   int64 thread_id = 4;
//!   string author = 5;
//!   string author_url = 6;
//!   string rep_name = 7;
//!   string rep_url = 8;
//! }
//! ```
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`client`] | [`send`], [`send_local`], [`GrpcRelay`] |
//! | [`proto`] | Wire types and generated client/server stubs |
//! | [`server`] | Stub receiver used for local runs and tests |

pub mod client;
pub mod proto;
pub mod server;

pub use client::{send, send_local, GrpcRelay, DEFAULT_ADDRESS, RELAY_TIMEOUT};
pub use server::StubReceiver;
