//! Domain models for the showcase server.
//!
//! Each module pairs the normalized record served to clients with the raw
//! GitHub payload it is built from.

pub mod contribution;
pub mod pull_request;
pub mod repository;
pub mod user;

pub use contribution::{Contribution, ContributionSummary, GitHubEventPayload};
pub use pull_request::{
    GitHubIssueSearchPayload, GitHubPullRequestLinks, GitHubPullRequestPayload, PullRequest,
    PullRequestState, RepositoryRef,
};
pub use repository::{GitHubRepositoryPayload, Repository, UNKNOWN_LANGUAGE};
pub use user::{GitHubUserPayload, User};
