//! Actix-web extractor for the optional per-request GitHub token.
//!
//! # Security
//! - The token is wrapped in `SecretString` as soon as it is read
//! - It is never logged or exposed in debug output
//! - Memory is zeroized when the request completes

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use secrecy::{ExposeSecret, SecretString};
use std::future::{Ready, ready};

use crate::config::GITHUB_TOKEN_HEADER;
use crate::error::AppError;

/// Optional GitHub token supplied by the caller in `X-GitHub-Token`.
///
/// A missing or blank header yields `GitHubToken(None)`; the server's
/// default token (if any) then applies.
/// ```ignore
/// async fn handler(token: GitHubToken) -> impl Responder {
///     aggregator.summarize(&username, token.as_secret()).await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubToken(Option<SecretString>);

impl GitHubToken {
    /// Borrow the token, if one was supplied.
    pub fn as_secret(&self) -> Option<&SecretString> {
        self.0.as_ref()
    }
}

impl FromRequest for GitHubToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(value) = req.headers().get(GITHUB_TOKEN_HEADER) else {
            return ready(Ok(GitHubToken(None)));
        };

        let token = match value.to_str() {
            Ok(s) => SecretString::from(s.trim().to_string()),
            Err(_) => {
                return ready(Err(AppError::InvalidInput(format!(
                    "{} header must be visible ASCII",
                    GITHUB_TOKEN_HEADER
                ))));
            }
        };

        if token.expose_secret().is_empty() {
            return ready(Ok(GitHubToken(None)));
        }

        ready(Ok(GitHubToken(Some(token))))
    }
}
