//! GitHub user API handlers.
//!
//! Each handler forwards the optional `X-GitHub-Token` header to the
//! aggregator. Lists are returned unbounded; truncating them for display is
//! left to the front-end.

use actix_web::{HttpResponse, web};

use crate::auth::GitHubToken;
use crate::error::AppResult;
use crate::models::{Contribution, ContributionSummary, PullRequest, Repository, User};
use crate::services::ContributionAggregator;

/// Contribution summary for a user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/summary",
    tag = "Users",
    params(
        ("username" = String, Path, description = "GitHub login"),
        ("X-GitHub-Token" = Option<String>, Header, description = "GitHub token for higher rate limits")
    ),
    responses(
        (status = 200, description = "Aggregated profile, repositories, pull requests and contributions", body = ContributionSummary),
        (status = 400, description = "Invalid username", body = crate::error::ErrorResponse),
        (status = 502, description = "A GitHub fetch failed", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_summary(
    aggregator: web::Data<ContributionAggregator>,
    path: web::Path<String>,
    token: GitHubToken,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();
    let summary = aggregator.summarize(&username, token.as_secret()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Normalized profile for a user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/profile",
    tag = "Users",
    params(
        ("username" = String, Path, description = "GitHub login"),
        ("X-GitHub-Token" = Option<String>, Header, description = "GitHub token for higher rate limits")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 400, description = "Invalid username", body = crate::error::ErrorResponse),
        (status = 502, description = "GitHub fetch failed", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_profile(
    aggregator: web::Data<ContributionAggregator>,
    path: web::Path<String>,
    token: GitHubToken,
) -> AppResult<HttpResponse> {
    let user = aggregator.fetch_user(&path, token.as_secret()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Repositories owned by a user, most starred first.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/repositories",
    tag = "Users",
    params(
        ("username" = String, Path, description = "GitHub login"),
        ("X-GitHub-Token" = Option<String>, Header, description = "GitHub token for higher rate limits")
    ),
    responses(
        (status = 200, description = "Repositories", body = [Repository]),
        (status = 400, description = "Invalid username", body = crate::error::ErrorResponse),
        (status = 502, description = "GitHub fetch failed", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_repositories(
    aggregator: web::Data<ContributionAggregator>,
    path: web::Path<String>,
    token: GitHubToken,
) -> AppResult<HttpResponse> {
    let repositories = aggregator
        .fetch_repositories(&path, token.as_secret())
        .await?;
    Ok(HttpResponse::Ok().json(repositories))
}

/// Pull requests authored by a user, most recently updated first.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/pull-requests",
    tag = "Users",
    params(
        ("username" = String, Path, description = "GitHub login"),
        ("X-GitHub-Token" = Option<String>, Header, description = "GitHub token for higher rate limits")
    ),
    responses(
        (status = 200, description = "Pull requests", body = [PullRequest]),
        (status = 400, description = "Invalid username", body = crate::error::ErrorResponse),
        (status = 502, description = "GitHub fetch failed", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_pull_requests(
    aggregator: web::Data<ContributionAggregator>,
    path: web::Path<String>,
    token: GitHubToken,
) -> AppResult<HttpResponse> {
    let pull_requests = aggregator
        .fetch_pull_requests(&path, token.as_secret())
        .await?;
    Ok(HttpResponse::Ok().json(pull_requests))
}

/// Public events per day for a user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/contributions",
    tag = "Users",
    params(
        ("username" = String, Path, description = "GitHub login"),
        ("X-GitHub-Token" = Option<String>, Header, description = "GitHub token for higher rate limits")
    ),
    responses(
        (status = 200, description = "Per-day event counts in first-seen order", body = [Contribution]),
        (status = 400, description = "Invalid username", body = crate::error::ErrorResponse),
        (status = 502, description = "GitHub fetch failed", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_contributions(
    aggregator: web::Data<ContributionAggregator>,
    path: web::Path<String>,
    token: GitHubToken,
) -> AppResult<HttpResponse> {
    let contributions = aggregator
        .fetch_contributions(&path, token.as_secret())
        .await?;
    Ok(HttpResponse::Ok().json(contributions))
}

/// Configure user routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/users/{username}/summary").route(web::get().to(get_summary)))
        .service(web::resource("/users/{username}/profile").route(web::get().to(get_profile)))
        .service(
            web::resource("/users/{username}/repositories")
                .route(web::get().to(get_repositories)),
        )
        .service(
            web::resource("/users/{username}/pull-requests")
                .route(web::get().to(get_pull_requests)),
        )
        .service(
            web::resource("/users/{username}/contributions")
                .route(web::get().to(get_contributions)),
        );
}
