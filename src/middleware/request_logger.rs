//! Request logging middleware.
//!
//! Logs one line when a request arrives and one when it completes. The
//! `X-GitHub-Token` header is reported only as present/absent.

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::config::GITHUB_TOKEN_HEADER;

/// How a finished request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    ClientError,
    /// GitHub could not be reached or answered with an error.
    UpstreamError,
    ServerError,
}

impl Outcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() || status.is_redirection() || status.is_informational() {
            Self::Completed
        } else if status.is_client_error() {
            Self::ClientError
        } else if status == StatusCode::BAD_GATEWAY {
            Self::UpstreamError
        } else {
            Self::ServerError
        }
    }
}

/// Request logger middleware factory.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

/// Request logger middleware service.
pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let remote_addr = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();
        let github_token = if req.headers().contains_key(GITHUB_TOKEN_HEADER) {
            "present"
        } else {
            "none"
        };

        info!(
            target: "api",
            method = %method,
            path = %path,
            remote_addr = %remote_addr,
            github_token = github_token,
            "→ Request started"
        );

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let duration_ms = start.elapsed().as_millis() as u64;
            let status = res.status().as_u16();

            match Outcome::from_status(res.status()) {
                Outcome::Completed => info!(
                    target: "api",
                    method = %method, path = %path, status, duration_ms,
                    "← Request completed"
                ),
                Outcome::ClientError => warn!(
                    target: "api",
                    method = %method, path = %path, status, duration_ms,
                    "← Client error"
                ),
                Outcome::UpstreamError => warn!(
                    target: "api",
                    method = %method, path = %path, status, duration_ms,
                    "← GitHub request failed"
                ),
                Outcome::ServerError => error!(
                    target: "api",
                    method = %method, path = %path, status, duration_ms,
                    "← Server error"
                ),
            }

            Ok(res)
        })
    }
}
