//! Mock GitHub REST API for E2E tests.
//!
//! Starts an in-process HTTP server answering the four endpoints the
//! aggregator uses. Every request is recorded with its auth headers so tests
//! can assert on what was sent upstream.

use actix_web::http::StatusCode;
use actix_web::http::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

/// Upstream endpoint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    User,
    Repositories,
    SearchIssues,
    Events,
}

/// One request as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub endpoint: Endpoint,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

/// Canned responses and the request log.
pub struct MockGitHubState {
    pub user: Value,
    pub repositories: Value,
    pub pull_requests: Value,
    pub events: Value,
    pub failures: HashMap<Endpoint, StatusCode>,
    pub requests: Vec<RecordedRequest>,
}

impl MockGitHubState {
    fn body(&self, endpoint: Endpoint) -> Value {
        match endpoint {
            Endpoint::User => self.user.clone(),
            Endpoint::Repositories => self.repositories.clone(),
            Endpoint::SearchIssues => json!({
                "total_count": self.pull_requests.as_array().map_or(0, Vec::len),
                "incomplete_results": false,
                "items": self.pull_requests.clone(),
            }),
            Endpoint::Events => self.events.clone(),
        }
    }
}

fn header(req: &HttpRequest, name: actix_web::http::header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn respond(state: &Mutex<MockGitHubState>, req: &HttpRequest, endpoint: Endpoint) -> HttpResponse {
    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        endpoint,
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: header(req, AUTHORIZATION),
        accept: header(req, ACCEPT),
        user_agent: header(req, USER_AGENT),
    });

    match state.failures.get(&endpoint) {
        Some(status) => HttpResponse::build(*status).json(json!({
            "message": "mock failure",
            "documentation_url": "https://docs.github.com/rest",
        })),
        None => HttpResponse::Ok().json(state.body(endpoint)),
    }
}

async fn user(state: web::Data<Arc<Mutex<MockGitHubState>>>, req: HttpRequest) -> HttpResponse {
    respond(&state, &req, Endpoint::User)
}

async fn repositories(
    state: web::Data<Arc<Mutex<MockGitHubState>>>,
    req: HttpRequest,
) -> HttpResponse {
    respond(&state, &req, Endpoint::Repositories)
}

async fn search_issues(
    state: web::Data<Arc<Mutex<MockGitHubState>>>,
    req: HttpRequest,
) -> HttpResponse {
    respond(&state, &req, Endpoint::SearchIssues)
}

async fn events(state: web::Data<Arc<Mutex<MockGitHubState>>>, req: HttpRequest) -> HttpResponse {
    respond(&state, &req, Endpoint::Events)
}

/// Profile payload for `login`.
pub fn user_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": 583231,
        "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "name": "The Octocat",
        "bio": null,
        "public_repos": 8,
        "followers": 4000,
        "following": 9,
    })
}

/// Mock GitHub server.
pub struct MockGitHub {
    pub base_url: String,
    pub state: Arc<Mutex<MockGitHubState>>,
}

impl MockGitHub {
    /// Start the mock on an ephemeral port with an `octocat` profile and
    /// empty lists.
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockGitHubState {
            user: user_json("octocat"),
            repositories: json!([]),
            pull_requests: json!([]),
            events: json!([]),
            failures: HashMap::new(),
            requests: Vec::new(),
        }));

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let state_data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state_data.clone()))
                .route("/users/{username}", web::get().to(user))
                .route("/users/{username}/repos", web::get().to(repositories))
                .route("/users/{username}/events/public", web::get().to(events))
                .route("/search/issues", web::get().to(search_issues))
        })
        .workers(1)
        .listen(listener)
        .expect("failed to listen")
        .disable_signals()
        .run();

        // Stops with the test's runtime
        tokio::spawn(server);

        MockGitHub { base_url, state }
    }

    pub fn set_repositories(&self, repositories: Value) {
        self.state.lock().unwrap().repositories = repositories;
    }

    pub fn set_pull_requests(&self, pull_requests: Value) {
        self.state.lock().unwrap().pull_requests = pull_requests;
    }

    pub fn set_events(&self, events: Value) {
        self.state.lock().unwrap().events = events;
    }

    /// Make `endpoint` answer with `status` instead of its payload.
    pub fn fail(&self, endpoint: Endpoint, status: StatusCode) {
        self.state.lock().unwrap().failures.insert(endpoint, status);
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// The single request received for `endpoint`.
    pub fn request_for(&self, endpoint: Endpoint) -> RecordedRequest {
        let matching: Vec<_> = self
            .requests()
            .into_iter()
            .filter(|r| r.endpoint == endpoint)
            .collect();
        assert_eq!(matching.len(), 1, "expected one {:?} request", endpoint);
        matching.into_iter().next().unwrap()
    }
}
