//! Pull request models.
//!
//! Pull requests come from the issue search API, so the payload is an issue
//! with a `pull_request` link object rather than a full pull request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Derived pull request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
    Merged,
}

impl PullRequestState {
    /// Derive the state from the raw issue state and the merge timestamp.
    ///
    /// Anything other than `open` follows the `closed` rule.
    pub fn derive(raw_state: &str, merged_at: Option<&str>) -> Self {
        match (raw_state, merged_at) {
            ("open", _) => Self::Open,
            (_, Some(_)) => Self::Merged,
            (_, None) => Self::Closed,
        }
    }
}

/// Owner/name pair of the repository a pull request targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RepositoryRef {
    pub name: String,
    pub owner: String,
}

impl RepositoryRef {
    /// Parse an API repository URL of the form `.../repos/{owner}/{name}`.
    ///
    /// The name is the last path segment and the owner is segment 4 of the
    /// `/`-split URL. Missing segments yield empty strings.
    pub fn from_api_url(url: &str) -> Self {
        let segments: Vec<&str> = url.split('/').collect();
        Self {
            name: segments.last().copied().unwrap_or_default().to_string(),
            owner: segments.get(4).copied().unwrap_or_default().to_string(),
        }
    }
}

/// Normalized pull request authored by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub id: u64,
    pub title: String,
    pub number: u64,
    pub url: String,
    pub state: PullRequestState,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<String>,
    pub repository: RepositoryRef,
    /// Always 0: the search API does not report line counts.
    pub additions: u32,
    /// Always 0: the search API does not report line counts.
    pub deletions: u32,
}

/// Search response wrapper from `GET /search/issues`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubIssueSearchPayload {
    pub items: Vec<GitHubPullRequestPayload>,
}

/// Issue search item describing a pull request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubPullRequestPayload {
    pub id: u64,
    pub title: String,
    pub number: u64,
    pub html_url: String,
    pub state: String,
    pub created_at: String,
    pub repository_url: String,
    pub pull_request: Option<GitHubPullRequestLinks>,
}

/// The `pull_request` object attached to issue search items.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubPullRequestLinks {
    pub merged_at: Option<String>,
}
