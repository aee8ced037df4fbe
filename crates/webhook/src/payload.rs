//! Sub-records embedded in a [`crate::CanonicalEvent`].
//!
//! Each struct mirrors the subset of a GitHub webhook object that GitTracker
//! reads. All of them decode from partial input: a missing field takes its
//! zero value, and so does an explicit JSON `null` (GitHub sends `null` for
//! an empty issue body, an unassigned issue, a deleted branch's head commit,
//! and so on). Fields GitTracker does not model are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` as the type's zero value instead of failing.
///
/// Used together with a container-level `#[serde(default)]`, which covers the
/// missing-field case.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Accounts and repositories
// ---------------------------------------------------------------------------

/// Owner of a repository (user or organisation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(deserialize_with = "nullable")]
    pub login: String,
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub node_id: String,
}

/// The repository an event belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub node_id: String,
    /// Short name, e.g. `"gittracker"`.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// `"owner/name"`.
    #[serde(deserialize_with = "nullable")]
    pub full_name: String,
    pub private: bool,
    #[serde(deserialize_with = "nullable")]
    pub owner: Owner,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
}

/// A GitHub account as it appears in `sender`, `user`, `assignee`, and
/// release `author` positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sender {
    /// API URL of the account (`https://api.github.com/users/...`).
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Browser URL of the account profile.
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub login: String,
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub avatar_url: String,
}

// ---------------------------------------------------------------------------
// Issues and comments
// ---------------------------------------------------------------------------

/// A label attached to an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub color: String,
    pub default: bool,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

/// The `issue` object of `issues` and `issue_comment` events.
///
/// A zero `number` means "no issue in this payload".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    pub number: u64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub body: String,
    /// `"open"` or `"closed"`.
    #[serde(deserialize_with = "nullable")]
    pub state: String,
    /// `"completed"`, `"not_planned"`, `"reopened"`, or empty.
    #[serde(deserialize_with = "nullable")]
    pub state_reason: String,
    #[serde(deserialize_with = "nullable")]
    pub user: Sender,
    pub assignee: Option<Sender>,
    #[serde(deserialize_with = "nullable")]
    pub labels: Vec<Label>,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: String,
    pub closed_at: Option<String>,
    /// Number of comments on the issue.
    pub comments: u64,
}

/// The `comment` object of `issue_comment` events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub body: String,
    #[serde(deserialize_with = "nullable")]
    pub user: Sender,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: String,
}

// ---------------------------------------------------------------------------
// Commits
// ---------------------------------------------------------------------------

/// Git identity attached to a commit, and the `pusher` of a push event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
}

/// One entry of `commits`, and the `head_commit` of a push event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub tree_url: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    /// Commit SHA.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
    #[serde(deserialize_with = "nullable")]
    pub author: CommitAuthor,
    #[serde(deserialize_with = "nullable")]
    pub committer: CommitAuthor,
    #[serde(deserialize_with = "nullable")]
    pub added: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub removed: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub modified: Vec<String>,
}

// ---------------------------------------------------------------------------
// Pull requests
// ---------------------------------------------------------------------------

/// The `base` or `head` side of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitRef {
    /// Branch name without the `refs/heads/` prefix.
    #[serde(rename = "ref", deserialize_with = "nullable")]
    pub git_ref: String,
    #[serde(deserialize_with = "nullable")]
    pub sha: String,
    #[serde(deserialize_with = "nullable")]
    pub repo: Repository,
}

/// The `pull_request` object of `pull_request` events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub body: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub state: String,
    #[serde(deserialize_with = "nullable")]
    pub user: Sender,
    #[serde(deserialize_with = "nullable")]
    pub base: GitRef,
    #[serde(deserialize_with = "nullable")]
    pub head: GitRef,
}

// ---------------------------------------------------------------------------
// Releases
// ---------------------------------------------------------------------------

/// The `release` object of `release` events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub tag_name: String,
    #[serde(deserialize_with = "nullable")]
    pub target_commitish: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub draft: bool,
    pub prerelease: bool,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub published_at: String,
    #[serde(deserialize_with = "nullable")]
    pub author: Sender,
    #[serde(deserialize_with = "nullable")]
    pub body: String,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
}
