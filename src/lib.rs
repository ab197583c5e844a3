//! Open-Source Showcase server library.
//!
//! Fetches a GitHub user's profile, repositories, pull requests and recent
//! public activity, normalizes them and aggregates them into one
//! `ContributionSummary` served over HTTP.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
