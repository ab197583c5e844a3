//! Business logic services.

pub mod aggregator;
pub mod github_client;
pub mod normalizer;

pub use aggregator::{ContributionAggregator, FetchError, validate_username};
pub use github_client::{ClientError, GitHubClient};
