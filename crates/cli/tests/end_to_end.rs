//! Full delivery path over real sockets: HTTP webhook in, gRPC message out.

use std::sync::Arc;
use std::time::Duration;

use dispatch::DispatchRegistry;
use relay::{GrpcRelay, StubReceiver};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot};
use webhook::OutboundMessage;

struct Harness {
    webhook_url: String,
    received: mpsc::UnboundedReceiver<OutboundMessage>,
    stop: Vec<oneshot::Sender<()>>,
}

impl Harness {
    async fn start() -> Self {
        let stub_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let stub_address = stub_listener.local_addr().unwrap().to_string();
        let (tx, received) = mpsc::unbounded_channel();
        let (stub_stop, stub_stopped) = oneshot::channel::<()>();
        tokio::spawn(relay::server::serve_with(
            stub_listener,
            StubReceiver::forwarding_to(tx),
            async {
                let _ = stub_stopped.await;
            },
        ));

        let relay = GrpcRelay::new(stub_address).with_timeout(Duration::from_secs(2));
        let registry = DispatchRegistry::with_default_handlers(Arc::new(relay));

        let http_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let http_address = http_listener.local_addr().unwrap();
        let (http_stop, http_stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(http_listener, listener::router(Arc::new(registry)))
                .with_graceful_shutdown(async {
                    let _ = http_stopped.await;
                })
                .await
                .unwrap();
        });

        Self {
            webhook_url: format!("http://{http_address}/github-webhook/hook-123"),
            received,
            stop: vec![stub_stop, http_stop],
        }
    }

    async fn post(&self, event_type: &str, body: serde_json::Value) -> reqwest::StatusCode {
        reqwest::Client::new()
            .post(&self.webhook_url)
            .header("x-github-event", event_type)
            .json(&body)
            .send()
            .await
            .unwrap()
            .status()
    }

    async fn next_message(&mut self) -> OutboundMessage {
        tokio::time::timeout(Duration::from_secs(3), self.received.recv())
            .await
            .expect("no message relayed in time")
            .expect("relay channel closed")
    }

    fn stop(self) {
        for stop in self.stop {
            let _ = stop.send(());
        }
    }
}

#[tokio::test]
async fn push_webhook_is_relayed_as_new_commit() {
    let mut harness = Harness::start().await;

    let status = harness
        .post(
            "push",
            json!({
                "ref": "refs/heads/main",
                "repository": {
                    "name": "gittracker",
                    "html_url": "https://github.com/octo-org/gittracker"
                },
                "sender": {
                    "login": "octocat",
                    "url": "https://api.github.com/users/octocat"
                },
                "head_commit": { "message": "Fix login redirect" },
                "commits": [ { "message": "Fix login redirect" } ]
            }),
        )
        .await;
    assert_eq!(status, reqwest::StatusCode::OK);

    let message = harness.next_message().await;
    assert_eq!(message.event, "New commit");
    assert_eq!(message.comment, "Fix login redirect");
    assert_eq!(message.author, "octocat");
    assert_eq!(message.author_url, "https://api.github.com/users/octocat");
    assert_eq!(message.rep_name, "gittracker");
    assert_eq!(message.rep_url, "https://github.com/octo-org/gittracker");
    assert_eq!(message.chat_id.as_i64(), 0);
    assert_eq!(message.thread_id.as_i64(), 0);

    harness.stop();
}

#[tokio::test]
async fn issue_comment_webhook_is_relayed_with_preview() {
    let mut harness = Harness::start().await;

    let status = harness
        .post(
            "issue_comment",
            json!({
                "action": "created",
                "issue": {
                    "number": 17,
                    "title": "Webhook drops events",
                    "html_url": "https://github.com/octo-org/gittracker/issues/17",
                    "user": { "login": "reporter" },
                    "body": null,
                    "assignee": null,
                    "closed_at": null
                },
                "comment": { "body": "Same here", "user": { "login": "helper" } },
                "repository": { "name": "gittracker" },
                "sender": { "login": "helper" }
            }),
        )
        .await;
    assert_eq!(status, reqwest::StatusCode::OK);

    let message = harness.next_message().await;
    assert_eq!(message.event, "issue_comment_created");
    assert!(message.comment.contains("Comment by helper: Same here"));

    harness.stop();
}

#[tokio::test]
async fn unreachable_relay_still_acknowledges_webhook() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_address = closed.local_addr().unwrap().to_string();
    drop(closed);

    let relay = GrpcRelay::new(dead_address).with_timeout(Duration::from_millis(500));
    let registry = DispatchRegistry::with_default_handlers(Arc::new(relay));

    let http_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let http_address = http_listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(http_listener, listener::router(Arc::new(registry)))
            .await
            .unwrap();
    });

    let status = reqwest::Client::new()
        .post(format!("http://{http_address}/github-webhook/hook-123"))
        .header("x-github-event", "push")
        .json(&json!({ "ref": "refs/heads/main" }))
        .send()
        .await
        .unwrap()
        .status();

    assert_eq!(status, reqwest::StatusCode::OK);
}
