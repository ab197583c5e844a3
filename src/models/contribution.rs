//! Contribution models and the aggregated summary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PullRequest, Repository, User};

/// Number of public events recorded on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Contribution {
    /// Calendar day (`YYYY-MM-DD`).
    pub date: NaiveDate,
    pub count: u32,
}

/// Everything shown for one user, assembled from four independent fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSummary {
    pub user: User,
    /// Sum of `count` across `contributions`.
    pub total_contributions: u64,
    pub repositories: Vec<Repository>,
    pub pull_requests: Vec<PullRequest>,
    pub contributions: Vec<Contribution>,
}

impl ContributionSummary {
    /// Compose a summary, deriving the contribution total.
    pub fn new(
        user: User,
        repositories: Vec<Repository>,
        pull_requests: Vec<PullRequest>,
        contributions: Vec<Contribution>,
    ) -> Self {
        let total_contributions = contributions.iter().map(|c| u64::from(c.count)).sum();
        Self {
            user,
            total_contributions,
            repositories,
            pull_requests,
            contributions,
        }
    }
}

/// Public event from `GET /users/{username}/events/public`.
///
/// Only the timestamp matters for day bucketing.
#[derive(Debug, Deserialize)]
pub struct GitHubEventPayload {
    pub created_at: DateTime<Utc>,
}
