//! Contribution aggregation.
//!
//! Four independent fetch + normalize pipelines (profile, repositories,
//! pull requests, public events) run concurrently and are joined fail-fast:
//! the first failing pipeline's error is returned and the other results are
//! discarded. There is no partial summary.

use secrecy::SecretString;
use tracing::{debug, info, warn};

use super::github_client::{ClientError, GitHubClient};
use super::normalizer::{
    count_events_by_day, normalize_pull_request, normalize_repository, normalize_user,
};
use crate::models::{
    Contribution, ContributionSummary, GitHubEventPayload, GitHubIssueSearchPayload,
    GitHubRepositoryPayload, GitHubUserPayload, PullRequest, Repository, User,
};

/// Page size used for every list endpoint.
pub const PAGE_SIZE: u32 = 100;

/// Longest login GitHub allows.
const MAX_USERNAME_LEN: usize = 39;

/// Aggregation failures.
///
/// Fetch variants carry only the username. The upstream status and cause
/// are logged where the failure happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid GitHub username: {0}")]
    InvalidUsername(String),

    #[error("failed to fetch user {0}")]
    User(String),

    #[error("failed to fetch repositories for {0}")]
    Repositories(String),

    #[error("failed to fetch pull requests for {0}")]
    PullRequests(String),

    #[error("failed to fetch contributions for {0}")]
    Contributions(String),
}

/// Check that `username` is a plausible GitHub login.
///
/// Accepts 1-39 ASCII alphanumerics, hyphens, underscores (Enterprise
/// Managed Users) and square brackets (`dependabot[bot]`), not starting
/// with a hyphen. The login is percent-encoded wherever it reaches a URL.
pub fn validate_username(username: &str) -> Result<(), FetchError> {
    let valid = !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && !username.starts_with('-')
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '[' | ']'));

    if valid {
        Ok(())
    } else {
        Err(FetchError::InvalidUsername(username.to_string()))
    }
}

/// Builds contribution summaries from the GitHub REST API.
#[derive(Debug, Clone)]
pub struct ContributionAggregator {
    client: GitHubClient,
}

impl ContributionAggregator {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    /// Underlying GitHub client.
    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    /// Fetch and normalize the user's profile.
    pub async fn fetch_user(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<User, FetchError> {
        validate_username(username)?;
        self.load_user(username, token).await
    }

    async fn load_user(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<User, FetchError> {
        let path = format!("/users/{}", urlencoding::encode(username));
        let payload: GitHubUserPayload = self
            .client
            .get_json(&path, token)
            .await
            .map_err(|e| fetch_failed(&e, username, FetchError::User))?;

        Ok(normalize_user(payload))
    }

    /// Fetch the user's repositories, most starred first.
    ///
    /// The API ordering is preserved.
    pub async fn fetch_repositories(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<Vec<Repository>, FetchError> {
        validate_username(username)?;
        self.load_repositories(username, token).await
    }

    async fn load_repositories(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<Vec<Repository>, FetchError> {
        let path = format!(
            "/users/{}/repos?sort=stars&per_page={}",
            urlencoding::encode(username),
            PAGE_SIZE
        );
        let payload: Vec<GitHubRepositoryPayload> = self
            .client
            .get_json(&path, token)
            .await
            .map_err(|e| fetch_failed(&e, username, FetchError::Repositories))?;

        Ok(payload.into_iter().map(normalize_repository).collect())
    }

    /// Search pull requests authored by the user, most recently updated first.
    pub async fn fetch_pull_requests(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<Vec<PullRequest>, FetchError> {
        validate_username(username)?;
        self.load_pull_requests(username, token).await
    }

    async fn load_pull_requests(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<Vec<PullRequest>, FetchError> {
        let path = format!(
            "/search/issues?q=type:pr+author:{}&per_page={}&sort=updated",
            urlencoding::encode(username),
            PAGE_SIZE
        );
        let payload: GitHubIssueSearchPayload = self
            .client
            .get_json(&path, token)
            .await
            .map_err(|e| fetch_failed(&e, username, FetchError::PullRequests))?;

        Ok(payload
            .items
            .into_iter()
            .map(normalize_pull_request)
            .collect())
    }

    /// Count the user's recent public events per day.
    ///
    /// Bounded by one page of events, so this approximates activity rather
    /// than reproducing GitHub's contribution graph.
    pub async fn fetch_contributions(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<Vec<Contribution>, FetchError> {
        validate_username(username)?;
        self.load_contributions(username, token).await
    }

    async fn load_contributions(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<Vec<Contribution>, FetchError> {
        let path = format!(
            "/users/{}/events/public?per_page={}",
            urlencoding::encode(username),
            PAGE_SIZE
        );
        let events: Vec<GitHubEventPayload> = self
            .client
            .get_json(&path, token)
            .await
            .map_err(|e| fetch_failed(&e, username, FetchError::Contributions))?;

        debug!("Fetched {} public events for '{}'", events.len(), username);
        Ok(count_events_by_day(&events))
    }

    /// Build the full summary for `username`.
    pub async fn summarize(
        &self,
        username: &str,
        token: Option<&SecretString>,
    ) -> Result<ContributionSummary, FetchError> {
        validate_username(username)?;

        let (user, repositories, pull_requests, contributions) = tokio::try_join!(
            self.load_user(username, token),
            self.load_repositories(username, token),
            self.load_pull_requests(username, token),
            self.load_contributions(username, token),
        )?;

        let summary = ContributionSummary::new(user, repositories, pull_requests, contributions);

        info!(
            username = %username,
            repositories = summary.repositories.len(),
            pull_requests = summary.pull_requests.len(),
            days = summary.contributions.len(),
            total_contributions = summary.total_contributions,
            "Contribution summary assembled"
        );

        Ok(summary)
    }
}

/// Log the detailed cause and reduce it to the generic per-operation error.
fn fetch_failed(
    err: &ClientError,
    username: &str,
    variant: fn(String) -> FetchError,
) -> FetchError {
    let fetch_error = variant(username.to_string());
    warn!("{}: {}", fetch_error, err);
    fetch_error
}
