//! Caller-supplied GitHub credentials.

mod extractor;

pub use extractor::GitHubToken;
