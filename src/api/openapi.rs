//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Open-Source Showcase Server",
        version = "0.1.0",
        description = "Aggregates a GitHub user's profile, repositories, pull requests and recent public activity"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::info,
        // User endpoints
        api::users::get_summary,
        api::users::get_profile,
        api::users::get_repositories,
        api::users::get_pull_requests,
        api::users::get_contributions,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ServerInfoResponse,
            // Users
            models::User,
            models::Repository,
            models::PullRequest,
            models::PullRequestState,
            models::RepositoryRef,
            models::Contribution,
            models::ContributionSummary,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "GitHub profile, repositories, pull requests and contributions")
    )
)]
pub struct ApiDoc;
