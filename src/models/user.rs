//! GitHub user profile models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalized GitHub user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub login: String,
    pub avatar_url: String,
    pub profile_url: String,
    /// Display name; the login when GitHub has none.
    pub name: String,
    /// Profile bio; empty when unset.
    pub bio: String,
    pub public_repos: u32,
    pub followers: u32,
}

/// User payload from `GET /users/{username}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubUserPayload {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
}
