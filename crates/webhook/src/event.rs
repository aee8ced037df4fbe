//! The canonical event: one record for every GitHub webhook kind.
//!
//! GitHub's payload schema differs per event kind, and the kind is only named
//! in a request header. [`CanonicalEvent`] is the union of the sections
//! GitTracker reads from `push`, `issues`, `issue_comment`, `pull_request`,
//! and `release` payloads. A decoded event populates exactly the sections its
//! kind carries; all others stay at their zero value (or `None`).
//!
//! Nothing here fails on a missing section. Every derivation returns a
//! best-effort default (`""`, `0`, an empty list) instead.

use serde::{Deserialize, Serialize};

use crate::errors::DecodeError;
use crate::identifiers::WebhookId;
use crate::payload::{
    nullable, Comment, Commit, CommitAuthor, Issue, PullRequest, Release, Repository, Sender,
};

/// Length of the `refs/heads/` prefix stripped by [`CanonicalEvent::branch`].
pub const BRANCH_REF_PREFIX_LEN: usize = 11;

/// Maximum number of characters of a comment quoted in an issue message.
pub const COMMENT_PREVIEW_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Event kind
// ---------------------------------------------------------------------------

/// Event kind inferred from which payload sections are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PullRequest,
    Release,
    Issues,
    Push,
    Unknown,
}

impl EventKind {
    /// Returns the event-type key, matching GitHub's `X-GitHub-Event` names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PullRequest => "pull_request",
            Self::Release => "release",
            Self::Issues => "issues",
            Self::Push => "push",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Canonical event
// ---------------------------------------------------------------------------

/// A decoded GitHub webhook delivery, regardless of its kind.
///
/// Created once per inbound request, read-only afterwards, and dropped once
/// the handler returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalEvent {
    /// Webhook key assigned by the transport layer. Never read from the body.
    #[serde(skip)]
    pub id: Option<WebhookId>,

    #[serde(deserialize_with = "nullable")]
    pub action: String,
    #[serde(deserialize_with = "nullable")]
    pub issue: Issue,
    pub comment: Option<Comment>,
    #[serde(deserialize_with = "nullable")]
    pub repository: Repository,
    #[serde(deserialize_with = "nullable")]
    pub sender: Sender,
    pub private: bool,
    /// Top-level repository name, used when `repository` is absent.
    #[serde(deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(deserialize_with = "nullable")]
    pub head_commit: Commit,
    pub pull_request: Option<PullRequest>,
    pub release: Option<Release>,
    #[serde(rename = "ref", deserialize_with = "nullable")]
    pub git_ref: String,
    #[serde(deserialize_with = "nullable")]
    pub before: String,
    #[serde(deserialize_with = "nullable")]
    pub after: String,
    pub created: bool,
    pub deleted: bool,
    pub forced: bool,
    #[serde(deserialize_with = "nullable")]
    pub pusher: CommitAuthor,
    #[serde(deserialize_with = "nullable")]
    pub commits: Vec<Commit>,
}

impl CanonicalEvent {
    /// Decodes a payload body without knowing its kind in advance.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not JSON or a present, non-null
    /// field has an incompatible type. Missing or `null` sections are not
    /// errors.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Attaches the transport-assigned webhook key.
    #[must_use]
    pub fn with_id(mut self, id: WebhookId) -> Self {
        self.id = Some(id);
        self
    }

    // -----------------------------------------------------------------------
    // General derivations
    // -----------------------------------------------------------------------

    /// Infers the event kind. First match wins:
    /// pull request present, release present, issue number > 0, ref
    /// non-empty, otherwise [`EventKind::Unknown`].
    pub fn kind(&self) -> EventKind {
        if self.pull_request.is_some() {
            EventKind::PullRequest
        } else if self.release.is_some() {
            EventKind::Release
        } else if self.issue.number > 0 {
            EventKind::Issues
        } else if !self.git_ref.is_empty() {
            EventKind::Push
        } else {
            EventKind::Unknown
        }
    }

    /// Event-type key of [`Self::kind`].
    pub fn event_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Repository short name, falling back to the top-level `full_name`.
    pub fn repository_name(&self) -> &str {
        if self.repository.name.is_empty() {
            &self.full_name
        } else {
            &self.repository.name
        }
    }

    pub fn repository_url(&self) -> &str {
        &self.repository.html_url
    }

    /// Login of whoever triggered the event.
    ///
    /// Falls back to the pull request author, then to `"unknown"`.
    pub fn author_login(&self) -> &str {
        if !self.sender.login.is_empty() {
            return &self.sender.login;
        }
        match &self.pull_request {
            Some(pr) if !pr.user.login.is_empty() => pr.user.login.as_str(),
            _ => "unknown",
        }
    }

    pub fn author_url(&self) -> &str {
        &self.sender.url
    }

    pub fn author_avatar(&self) -> &str {
        &self.sender.avatar_url
    }

    /// Branch the event refers to.
    ///
    /// For pushes the first [`BRANCH_REF_PREFIX_LEN`] bytes of `ref` are
    /// dropped (`refs/heads/main` becomes `main`). A ref no longer than the
    /// prefix is returned unchanged. Without a ref, the pull request head
    /// branch is used.
    pub fn branch(&self) -> &str {
        if !self.git_ref.is_empty() {
            if self.git_ref.len() > BRANCH_REF_PREFIX_LEN {
                return self
                    .git_ref
                    .get(BRANCH_REF_PREFIX_LEN..)
                    .unwrap_or(self.git_ref.as_str());
            }
            return self.git_ref.as_str();
        }
        match &self.pull_request {
            Some(pr) if !pr.head.git_ref.is_empty() => pr.head.git_ref.as_str(),
            _ => "",
        }
    }

    /// Message of the head commit, else of the last listed commit.
    pub fn commit_message(&self) -> &str {
        if !self.head_commit.message.is_empty() {
            return &self.head_commit.message;
        }
        self.commits
            .last()
            .map(|c| c.message.as_str())
            .unwrap_or_default()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Files the head commit modified, followed by the files it added.
    ///
    /// Removed files are not included.
    pub fn changed_files(&self) -> Vec<&str> {
        self.head_commit
            .modified
            .iter()
            .chain(&self.head_commit.added)
            .map(String::as_str)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Issue and comment derivations
    // -----------------------------------------------------------------------

    pub fn issue_number(&self) -> u64 {
        self.issue.number
    }

    pub fn issue_title(&self) -> &str {
        &self.issue.title
    }

    pub fn issue_body(&self) -> &str {
        &self.issue.body
    }

    /// `"open"`, `"closed"`, or empty.
    pub fn issue_state(&self) -> &str {
        &self.issue.state
    }

    /// `"completed"`, `"not_planned"`, `"reopened"`, or empty.
    pub fn issue_state_reason(&self) -> &str {
        &self.issue.state_reason
    }

    pub fn issue_created_at(&self) -> &str {
        &self.issue.created_at
    }

    pub fn issue_updated_at(&self) -> &str {
        &self.issue.updated_at
    }

    /// Closing time, or empty while the issue is open.
    pub fn issue_closed_at(&self) -> &str {
        self.issue.closed_at.as_deref().unwrap_or_default()
    }

    pub fn issue_author(&self) -> &str {
        &self.issue.user.login
    }

    pub fn issue_author_url(&self) -> &str {
        &self.issue.user.url
    }

    /// Login of the assignee, or empty when unassigned.
    pub fn issue_assignee(&self) -> &str {
        self.issue
            .assignee
            .as_ref()
            .map(|a| a.login.as_str())
            .unwrap_or_default()
    }

    pub fn issue_labels(&self) -> Vec<&str> {
        self.issue.labels.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn issue_comment_count(&self) -> u64 {
        self.issue.comments
    }

    pub fn issue_url(&self) -> &str {
        &self.issue.html_url
    }

    pub fn is_issue_opened(&self) -> bool {
        self.issue.state == "open"
    }

    pub fn is_issue_closed(&self) -> bool {
        self.issue.state == "closed"
    }

    pub fn comment_body(&self) -> &str {
        self.comment
            .as_ref()
            .map(|c| c.body.as_str())
            .unwrap_or_default()
    }

    pub fn comment_author(&self) -> &str {
        self.comment
            .as_ref()
            .map(|c| c.user.login.as_str())
            .unwrap_or_default()
    }

    pub fn comment_author_url(&self) -> &str {
        self.comment
            .as_ref()
            .map(|c| c.user.url.as_str())
            .unwrap_or_default()
    }

    pub fn comment_created_at(&self) -> &str {
        self.comment
            .as_ref()
            .map(|c| c.created_at.as_str())
            .unwrap_or_default()
    }

    /// `issue_comment_<action>` for comment events, `issue_<action>`
    /// otherwise.
    pub fn issue_event_type(&self) -> String {
        if self.comment.is_some() {
            format!("issue_comment_{}", self.action)
        } else {
            format!("issue_{}", self.action)
        }
    }

    /// Renders the multi-line chat text for an issue event.
    ///
    /// A newly created comment is quoted, cut to
    /// [`COMMENT_PREVIEW_CHARS`] characters.
    pub fn format_issue_message(&self) -> String {
        let mut message = format!(
            "[{}] Issue #{}: {}\nRepository: {}\nAuthor: {}",
            self.action,
            self.issue_number(),
            self.issue_title(),
            self.repository_name(),
            self.issue_author(),
        );

        if self.comment.is_some() && self.action == "created" {
            message.push_str(&format!(
                "\nComment by {}: {}",
                self.comment_author(),
                preview(self.comment_body(), COMMENT_PREVIEW_CHARS),
            ));
        }

        message.push_str("\nURL: ");
        message.push_str(self.issue_url());
        message
    }

    // -----------------------------------------------------------------------
    // Pull request derivations
    // -----------------------------------------------------------------------

    pub fn pull_request_number(&self) -> u64 {
        self.pull_request.as_ref().map_or(0, |pr| pr.number)
    }

    pub fn pull_request_title(&self) -> &str {
        self.pull_request
            .as_ref()
            .map(|pr| pr.title.as_str())
            .unwrap_or_default()
    }

    pub fn pull_request_url(&self) -> &str {
        self.pull_request
            .as_ref()
            .map(|pr| pr.html_url.as_str())
            .unwrap_or_default()
    }

    pub fn pull_request_state(&self) -> &str {
        self.pull_request
            .as_ref()
            .map(|pr| pr.state.as_str())
            .unwrap_or_default()
    }

    /// Branch the pull request merges into.
    pub fn pull_request_base_branch(&self) -> &str {
        self.pull_request
            .as_ref()
            .map(|pr| pr.base.git_ref.as_str())
            .unwrap_or_default()
    }

    /// Branch the pull request merges from.
    pub fn pull_request_head_branch(&self) -> &str {
        self.pull_request
            .as_ref()
            .map(|pr| pr.head.git_ref.as_str())
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Release derivations
    // -----------------------------------------------------------------------

    pub fn release_tag(&self) -> &str {
        self.release
            .as_ref()
            .map(|r| r.tag_name.as_str())
            .unwrap_or_default()
    }

    pub fn release_name(&self) -> &str {
        self.release
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or_default()
    }

    pub fn release_url(&self) -> &str {
        self.release
            .as_ref()
            .map(|r| r.html_url.as_str())
            .unwrap_or_default()
    }

    pub fn release_body(&self) -> &str {
        self.release
            .as_ref()
            .map(|r| r.body.as_str())
            .unwrap_or_default()
    }

    pub fn is_prerelease(&self) -> bool {
        self.release.as_ref().is_some_and(|r| r.prerelease)
    }

    pub fn is_draft_release(&self) -> bool {
        self.release.as_ref().is_some_and(|r| r.draft)
    }
}

/// One-line summary used in logs, e.g. `push to gittracker:main by octocat`.
impl std::fmt::Display for CanonicalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repo = self.repository_name();
        match self.kind() {
            EventKind::Push => write!(
                f,
                "push to {}:{} by {}",
                repo,
                self.branch(),
                self.author_login()
            ),
            EventKind::PullRequest => write!(
                f,
                "PR #{} {} on {}",
                self.pull_request_number(),
                self.action,
                repo
            ),
            EventKind::Issues => write!(
                f,
                "Issue #{} {} on {}",
                self.issue_number(),
                self.action,
                repo
            ),
            EventKind::Release => write!(
                f,
                "Release {} {} on {}",
                self.release_tag(),
                self.action,
                repo
            ),
            EventKind::Unknown => write!(f, "unknown on {} by {}", repo, self.author_login()),
        }
    }
}

/// Cuts `text` to `max_chars` characters, appending `...` when shortened.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
