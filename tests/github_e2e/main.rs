//! GitHub E2E test suite.
//!
//! Runs the aggregator and the HTTP API against an in-process mock of the
//! GitHub REST API. No network access or credentials are needed.
//!
//! Run with: cargo test --test github_e2e

mod mock_github;

mod test_summary;
