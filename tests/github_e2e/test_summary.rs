//! Aggregation against well-formed upstream data.

use serde_json::json;
use showcase_lib::models::PullRequestState;
use showcase_lib::services::aggregator::PAGE_SIZE;

use super::mock_github::{Endpoint, MockGitHub};
use super::test_helpers::{create_aggregator, event_json, pull_request_json, repository_json};

#[actix_rt::test]
async fn test_user_without_repositories_or_pull_requests() {
    let mock = MockGitHub::start().await;
    mock.set_events(json!([
        event_json("2024-03-02T10:00:00Z"),
        event_json("2024-03-01T09:30:00Z"),
    ]));
    let aggregator = create_aggregator(&mock, None);

    let summary = aggregator.summarize("octocat", None).await.unwrap();

    assert_eq!(summary.user.login, "octocat");
    assert_eq!(summary.user.name, "The Octocat");
    assert_eq!(summary.user.bio, "");
    assert_eq!(summary.user.profile_url, "https://github.com/octocat");
    assert!(summary.repositories.is_empty());
    assert!(summary.pull_requests.is_empty());
    // One event per day: the total equals the number of active days
    assert_eq!(summary.contributions.len(), 2);
    assert_eq!(summary.total_contributions, 2);

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["repositories"], json!([]));
    assert_eq!(value["pullRequests"], json!([]));
    assert_eq!(value["totalContributions"], 2);
    assert_eq!(value["user"]["publicRepos"], 8);
    assert_eq!(
        value["contributions"],
        json!([
            { "date": "2024-03-02", "count": 1 },
            { "date": "2024-03-01", "count": 1 },
        ])
    );
}

#[actix_rt::test]
async fn test_total_is_sum_of_daily_counts() {
    let mock = MockGitHub::start().await;
    mock.set_events(json!([
        event_json("2024-03-02T23:10:00Z"),
        event_json("2024-03-01T12:00:00Z"),
        event_json("2024-03-02T01:00:00Z"),
        // 2024-03-02T02:00Z in UTC
        event_json("2024-03-01T21:00:00-05:00"),
    ]));
    let aggregator = create_aggregator(&mock, None);

    let summary = aggregator.summarize("octocat", None).await.unwrap();

    let days: Vec<(String, u32)> = summary
        .contributions
        .iter()
        .map(|c| (c.date.to_string(), c.count))
        .collect();
    assert_eq!(
        days,
        vec![("2024-03-02".to_string(), 3), ("2024-03-01".to_string(), 1)]
    );
    assert_eq!(summary.total_contributions, 4);
}

#[actix_rt::test]
async fn test_lists_are_normalized_in_upstream_order() {
    let mock = MockGitHub::start().await;
    mock.set_repositories(json!([
        repository_json(2, "popular", 500),
        { "id": 1, "name": "x", "html_url": "u", "stargazers_count": 5, "forks_count": 2 },
    ]));
    mock.set_pull_requests(json!([
        pull_request_json(11, "open", None),
        pull_request_json(12, "closed", Some("2024-03-03T08:00:00Z")),
        pull_request_json(13, "closed", None),
    ]));
    let aggregator = create_aggregator(&mock, None);

    let summary = aggregator.summarize("octocat", None).await.unwrap();

    let names: Vec<&str> = summary.repositories.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["popular", "x"]);
    assert_eq!(
        serde_json::to_value(&summary.repositories[1]).unwrap(),
        json!({
            "id": 1, "name": "x", "description": "", "url": "u",
            "language": "Unknown", "stars": 5, "forks": 2, "topics": []
        })
    );

    let states: Vec<PullRequestState> = summary.pull_requests.iter().map(|p| p.state).collect();
    assert_eq!(
        states,
        vec![
            PullRequestState::Open,
            PullRequestState::Merged,
            PullRequestState::Closed
        ]
    );
    let merged = &summary.pull_requests[1];
    assert_eq!(merged.merged_at.as_deref(), Some("2024-03-03T08:00:00Z"));
    assert_eq!(merged.repository.owner, "rust-lang");
    assert_eq!(merged.repository.name, "cargo");
    assert_eq!(merged.additions, 0);
    assert_eq!(merged.deletions, 0);
}

#[actix_rt::test]
async fn test_upstream_query_parameters() {
    let mock = MockGitHub::start().await;
    let aggregator = create_aggregator(&mock, None);

    aggregator.summarize("octocat", None).await.unwrap();

    assert_eq!(mock.requests().len(), 4);
    assert_eq!(mock.request_for(Endpoint::User).path, "/users/octocat");

    let repos = mock.request_for(Endpoint::Repositories);
    assert_eq!(repos.path, "/users/octocat/repos");
    assert_eq!(repos.query, format!("sort=stars&per_page={}", PAGE_SIZE));

    let search = mock.request_for(Endpoint::SearchIssues);
    assert_eq!(search.path, "/search/issues");
    assert_eq!(
        search.query,
        format!("q=type:pr+author:octocat&per_page={}&sort=updated", PAGE_SIZE)
    );

    let events = mock.request_for(Endpoint::Events);
    assert_eq!(events.path, "/users/octocat/events/public");
    assert_eq!(events.query, format!("per_page={}", PAGE_SIZE));
}

#[actix_rt::test]
async fn test_single_operations() {
    let mock = MockGitHub::start().await;
    mock.set_repositories(json!([repository_json(7, "solo", 3)]));
    mock.set_events(json!([event_json("2024-05-05T05:05:05Z")]));
    let aggregator = create_aggregator(&mock, None);

    let user = aggregator.fetch_user("octocat", None).await.unwrap();
    assert_eq!(user.followers, 4000);

    let repos = aggregator.fetch_repositories("octocat", None).await.unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].language, "Rust");
    assert_eq!(repos[0].topics, vec!["cli".to_string()]);

    let prs = aggregator.fetch_pull_requests("octocat", None).await.unwrap();
    assert!(prs.is_empty());

    let contributions = aggregator.fetch_contributions("octocat", None).await.unwrap();
    assert_eq!(contributions.len(), 1);
    assert_eq!(contributions[0].count, 1);

    assert_eq!(mock.requests().len(), 4);
}

#[actix_rt::test]
async fn test_bot_login_is_encoded_and_sent_upstream() {
    let mock = MockGitHub::start().await;
    let aggregator = create_aggregator(&mock, None);

    aggregator.summarize("dependabot[bot]", None).await.unwrap();

    assert_eq!(mock.requests().len(), 4);
    assert_eq!(
        mock.request_for(Endpoint::User).path,
        "/users/dependabot%5Bbot%5D"
    );
    assert_eq!(
        mock.request_for(Endpoint::Repositories).path,
        "/users/dependabot%5Bbot%5D/repos"
    );
    assert_eq!(
        mock.request_for(Endpoint::SearchIssues).query,
        format!(
            "q=type:pr+author:dependabot%5Bbot%5D&per_page={}&sort=updated",
            PAGE_SIZE
        )
    );
    assert_eq!(
        mock.request_for(Endpoint::Events).path,
        "/users/dependabot%5Bbot%5D/events/public"
    );
}
