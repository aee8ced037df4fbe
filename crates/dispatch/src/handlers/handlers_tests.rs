use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use webhook::{
    CanonicalEvent, ChatId, Commit, DeliveryError, GitRef, Issue, MessageRelay, OutboundMessage,
    PullRequest, Release, Repository, Sender, ThreadId,
};

use super::*;
use crate::registry::EventHandler;

#[derive(Default)]
struct RecordingRelay {
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingRelay {
    fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRelay for RecordingRelay {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn address(&self) -> &str {
        "recording"
    }
}

struct UnreachableRelay;

#[async_trait]
impl MessageRelay for UnreachableRelay {
    async fn send(&self, _message: &OutboundMessage) -> Result<(), DeliveryError> {
        Err(DeliveryError::Timeout {
            address: "localhost:1".into(),
            timeout: Duration::from_secs(5),
        })
    }

    fn address(&self) -> &str {
        "localhost:1"
    }
}

fn repository() -> Repository {
    Repository {
        name: "gittracker".into(),
        html_url: "https://github.com/octo-org/gittracker".into(),
        ..Repository::default()
    }
}

fn sender() -> Sender {
    Sender {
        login: "octocat".into(),
        url: "https://api.github.com/users/octocat".into(),
        ..Sender::default()
    }
}

fn push_event() -> CanonicalEvent {
    CanonicalEvent {
        git_ref: "refs/heads/main".into(),
        repository: repository(),
        sender: sender(),
        head_commit: Commit {
            message: "Fix login redirect".into(),
            ..Commit::default()
        },
        ..CanonicalEvent::default()
    }
}

// ---------------------------------------------------------------------------
// Push
// ---------------------------------------------------------------------------

#[tokio::test]
async fn push_handler_delivers_commit_message() {
    let relay = Arc::new(RecordingRelay::default());
    let handler = PushHandler::new(relay.clone());

    handler.handle(&push_event()).await.unwrap();

    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        OutboundMessage {
            event: "New commit".into(),
            comment: "Fix login redirect".into(),
            chat_id: ChatId::new(0),
            thread_id: ThreadId::new(0),
            author: "octocat".into(),
            author_url: "https://api.github.com/users/octocat".into(),
            rep_name: "gittracker".into(),
            rep_url: "https://github.com/octo-org/gittracker".into(),
        }
    );
}

#[tokio::test]
async fn push_handler_sends_for_empty_event() {
    let relay = Arc::new(RecordingRelay::default());
    PushHandler::new(relay.clone())
        .handle(&CanonicalEvent::default())
        .await
        .unwrap();

    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].comment, "");
    assert_eq!(sent[0].author, "unknown");
}

#[tokio::test]
async fn delivery_failure_does_not_fail_handler() {
    let relay: Arc<dyn MessageRelay> = Arc::new(UnreachableRelay);

    assert!(PushHandler::new(relay.clone())
        .handle(&push_event())
        .await
        .is_ok());
    assert!(IssuesHandler::new(relay.clone())
        .handle(&CanonicalEvent::default())
        .await
        .is_ok());
    assert!(PullRequestHandler::new(relay.clone())
        .handle(&CanonicalEvent::default())
        .await
        .is_ok());
    assert!(ReleaseHandler::new(relay)
        .handle(&CanonicalEvent::default())
        .await
        .is_ok());
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

#[test]
fn issue_message_uses_issue_event_type_and_formatted_body() {
    let event = CanonicalEvent {
        action: "opened".into(),
        issue: Issue {
            number: 9,
            title: "Flaky test".into(),
            html_url: "https://github.com/octo-org/gittracker/issues/9".into(),
            user: sender(),
            ..Issue::default()
        },
        repository: repository(),
        sender: sender(),
        ..CanonicalEvent::default()
    };

    let message = IssuesHandler::message(&event);
    assert_eq!(message.event, "issue_opened");
    assert_eq!(message.comment, event.format_issue_message());
    assert!(message.comment.starts_with("[opened] Issue #9: Flaky test"));
    assert_eq!(message.rep_name, "gittracker");
}

// ---------------------------------------------------------------------------
// Pull requests
// ---------------------------------------------------------------------------

#[test]
fn pull_request_message_lists_branches_and_url() {
    let event = CanonicalEvent {
        action: "opened".into(),
        pull_request: Some(PullRequest {
            number: 12,
            title: "Add release handler".into(),
            html_url: "https://github.com/octo-org/gittracker/pull/12".into(),
            base: GitRef {
                git_ref: "main".into(),
                ..GitRef::default()
            },
            head: GitRef {
                git_ref: "feature/release".into(),
                ..GitRef::default()
            },
            ..PullRequest::default()
        }),
        repository: repository(),
        ..CanonicalEvent::default()
    };

    let message = PullRequestHandler::message(&event);
    assert_eq!(message.event, "pull_request_opened");
    assert_eq!(
        message.comment,
        "PR #12: Add release handler\n\
         feature/release -> main\n\
         https://github.com/octo-org/gittracker/pull/12"
    );
}

// ---------------------------------------------------------------------------
// Releases
// ---------------------------------------------------------------------------

fn release_event(prerelease: bool) -> CanonicalEvent {
    CanonicalEvent {
        action: "published".into(),
        release: Some(Release {
            tag_name: "v1.2.0".into(),
            name: "Spring release".into(),
            prerelease,
            html_url: "https://github.com/octo-org/gittracker/releases/tag/v1.2.0".into(),
            ..Release::default()
        }),
        repository: repository(),
        sender: sender(),
        ..CanonicalEvent::default()
    }
}

#[test]
fn release_message_names_tag_and_url() {
    let message = ReleaseHandler::message(&release_event(false));
    assert_eq!(message.event, "release_published");
    assert_eq!(
        message.comment,
        "Release v1.2.0: Spring release\n\
         https://github.com/octo-org/gittracker/releases/tag/v1.2.0"
    );
}

#[test]
fn release_message_marks_prereleases() {
    let message = ReleaseHandler::message(&release_event(true));
    assert!(message
        .comment
        .starts_with("Release v1.2.0: Spring release (pre-release)\n"));
}
