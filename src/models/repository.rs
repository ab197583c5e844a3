//! Repository models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Language reported for repositories GitHub could not classify.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Normalized public repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
    pub topics: Vec<String>,
}

/// Repository payload from `GET /users/{username}/repos`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubRepositoryPayload {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub topics: Option<Vec<String>>,
}
