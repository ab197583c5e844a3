//! Mapping from raw GitHub payloads to normalized records.
//!
//! Every function here is total: absent or null optional fields get
//! defaults instead of failing.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{
    Contribution, GitHubEventPayload, GitHubPullRequestPayload, GitHubRepositoryPayload,
    GitHubUserPayload, PullRequest, PullRequestState, Repository, RepositoryRef, User,
    UNKNOWN_LANGUAGE,
};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Normalize a user profile. `name` falls back to the login.
pub fn normalize_user(payload: GitHubUserPayload) -> User {
    let name = non_empty(payload.name).unwrap_or_else(|| payload.login.clone());

    User {
        login: payload.login,
        avatar_url: payload.avatar_url,
        profile_url: payload.html_url,
        name,
        bio: payload.bio.unwrap_or_default(),
        public_repos: payload.public_repos,
        followers: payload.followers,
    }
}

/// Normalize a repository.
pub fn normalize_repository(payload: GitHubRepositoryPayload) -> Repository {
    Repository {
        id: payload.id,
        name: payload.name,
        description: payload.description.unwrap_or_default(),
        url: payload.html_url,
        language: non_empty(payload.language).unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        stars: payload.stargazers_count,
        forks: payload.forks_count,
        topics: payload.topics.unwrap_or_default(),
    }
}

/// Normalize an issue search item into a pull request.
pub fn normalize_pull_request(payload: GitHubPullRequestPayload) -> PullRequest {
    let merged_at = payload.pull_request.and_then(|links| links.merged_at);
    let state = PullRequestState::derive(&payload.state, merged_at.as_deref());

    PullRequest {
        id: payload.id,
        title: payload.title,
        number: payload.number,
        url: payload.html_url,
        state,
        created_at: payload.created_at,
        merged_at,
        repository: RepositoryRef::from_api_url(&payload.repository_url),
        additions: 0,
        deletions: 0,
    }
}

/// Count events per UTC calendar day.
///
/// Days are emitted in the order they are first seen in `events`, not
/// sorted by date.
pub fn count_events_by_day(events: &[GitHubEventPayload]) -> Vec<Contribution> {
    let mut slots: HashMap<NaiveDate, usize> = HashMap::new();
    let mut days: Vec<Contribution> = Vec::new();

    for event in events {
        let date = event.created_at.date_naive();
        let slot = *slots.entry(date).or_insert_with(|| {
            days.push(Contribution { date, count: 0 });
            days.len() - 1
        });
        days[slot].count += 1;
    }

    days
}
