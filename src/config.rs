//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

/// HTTP header carrying an optional per-request GitHub token.
pub const GITHUB_TOKEN_HEADER: &str = "X-GitHub-Token";

/// Default values.
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 8080;
    pub const GITHUB_API_URL: &str = "https://api.github.com";
    /// Front-end dev server origins allowed by CORS in development.
    pub const DEV_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Upstream GitHub API settings.
#[derive(Debug, Clone)]
pub struct GitHubSettings {
    /// REST API base URL
    pub api_url: String,
    /// Default token used when a request does not supply one
    pub token: Option<SecretString>,
    /// Total request timeout; `None` leaves the transport default
    pub request_timeout: Option<Duration>,
}

impl GitHubSettings {
    /// Load GitHub settings from `SHOWCASE_GITHUB_API_URL`, `GITHUB_TOKEN`
    /// and `SHOWCASE_HTTP_TIMEOUT_SECS`. Blank tokens count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("SHOWCASE_GITHUB_API_URL")
            .unwrap_or_else(|_| defaults::GITHUB_API_URL.to_string());

        let token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .map(SecretString::from);

        let request_timeout = match env::var("SHOWCASE_HTTP_TIMEOUT_SECS") {
            Ok(value) => Some(parse_timeout_secs(&value)?),
            Err(_) => None,
        };

        Ok(Self {
            api_url,
            token,
            request_timeout,
        })
    }
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_url: defaults::GITHUB_API_URL.to_string(),
            token: None,
            request_timeout: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// GitHub API settings
    pub github: GitHubSettings,
    /// Directory with a prebuilt front-end bundle
    pub static_dir: Option<PathBuf>,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `SHOWCASE_HOST`: Server host (default: 127.0.0.1)
    /// - `SHOWCASE_PORT`: Server port (default: 8080)
    /// - `SHOWCASE_GITHUB_API_URL`: GitHub REST API base (default: https://api.github.com)
    /// - `GITHUB_TOKEN`: Default GitHub token (optional, raises the rate limit)
    /// - `SHOWCASE_HTTP_TIMEOUT_SECS`: Upstream request timeout (optional)
    /// - `SHOWCASE_STATIC_DIR`: Prebuilt front-end directory (optional)
    /// - `SHOWCASE_ALLOWED_ORIGINS`: Comma-separated CORS origins
    ///   (default: localhost:3000 in development, none in production)
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("SHOWCASE_HOST").unwrap_or_else(|_| defaults::HOST.to_string());

        let port = env::var("SHOWCASE_PORT")
            .unwrap_or_else(|_| defaults::PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("SHOWCASE_PORT must be a valid port number"))?;

        let github = GitHubSettings::from_env()?;

        let static_dir = env::var("SHOWCASE_STATIC_DIR").ok().map(PathBuf::from);

        let allowed_origins = match env::var("SHOWCASE_ALLOWED_ORIGINS") {
            Ok(value) => parse_origins(&value),
            Err(_) if environment.is_development() => defaults::DEV_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            Err(_) => Vec::new(),
        };

        let config = Config {
            environment,
            host,
            port,
            github,
            static_dir,
            allowed_origins,
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate production-only constraints.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.github.api_url.starts_with("https://") {
            errors.push(format!(
                "SHOWCASE_GITHUB_API_URL '{}' must use https in production.",
                self.github.api_url
            ));
        }

        if self.allowed_origins.iter().any(|o| o == "*") {
            errors.push(
                "SHOWCASE_ALLOWED_ORIGINS must list explicit origins, not '*'.".to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

fn parse_timeout_secs(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue(
            "SHOWCASE_HTTP_TIMEOUT_SECS must be a positive number of seconds",
        )),
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
