//! Stub `SendMessage` receiver.
//!
//! Acknowledges every call with `Empty` after logging it. Used by the binary
//! when no chat bot is running locally, and by tests as the far end of the
//! relay.

use std::future::Future;

use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status};
use webhook::OutboundMessage;

use crate::proto::send_message_server::{SendMessage, SendMessageServer};
use crate::proto::{Empty, Message};

/// The receiving side of `hook.SendMessage`.
#[derive(Debug, Default, Clone)]
pub struct StubReceiver {
    forward: Option<mpsc::UnboundedSender<OutboundMessage>>,
}

impl StubReceiver {
    /// A receiver that also forwards every message to `forward`.
    pub fn forwarding_to(forward: mpsc::UnboundedSender<OutboundMessage>) -> Self {
        Self {
            forward: Some(forward),
        }
    }
}

#[tonic::async_trait]
impl SendMessage for StubReceiver {
    async fn send_message(&self, request: Request<Message>) -> Result<Response<Empty>, Status> {
        let message = OutboundMessage::from(request.into_inner());
        tracing::info!(
            event = %message.event,
            chat_id = %message.chat_id,
            thread_id = %message.thread_id,
            author = %message.author,
            repository = %message.rep_name,
            "Relay message received"
        );

        if let Some(forward) = &self.forward {
            if forward.send(message).is_err() {
                tracing::debug!("Relay message consumer has gone away");
            }
        }

        Ok(Response::new(Empty {}))
    }
}

/// Serves a plain [`StubReceiver`] on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the transport error if the server fails while running.
pub async fn serve(
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send,
) -> Result<(), tonic::transport::Error> {
    serve_with(listener, StubReceiver::default(), shutdown).await
}

/// Serves `receiver` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the transport error if the server fails while running.
pub async fn serve_with(
    listener: TcpListener,
    receiver: StubReceiver,
    shutdown: impl Future<Output = ()> + Send,
) -> Result<(), tonic::transport::Error> {
    if let Ok(address) = listener.local_addr() {
        tracing::info!(address = %address, "Stub relay receiver listening");
    }

    tonic::transport::Server::builder()
        .add_service(SendMessageServer::new(receiver))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}
