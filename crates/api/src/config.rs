use std::env;
use std::str::FromStr;
use std::time::Duration;

use landing_forge_core::generation::openrouter::DEFAULT_ENDPOINT;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("environment variable {name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// PostgreSQL connection URL. Ideas are kept in memory when unset.
    pub database_url: Option<String>,
    /// Maximum database connections in the pool.
    pub db_max_connections: u32,
    /// Minimum database connections in the pool.
    pub db_min_connections: u32,
    /// OpenRouter API key.
    pub openrouter_api_key: String,
    /// OpenRouter chat-completions endpoint.
    pub openrouter_url: String,
    /// Optional `HTTP-Referer` sent to OpenRouter.
    pub openrouter_referer: Option<String>,
    /// Model used when a request does not name one.
    pub default_model: String,
    /// Timeout for a single model call.
    pub model_timeout: Duration,
    /// Maximum accepted request body size.
    pub max_body_bytes: usize,
    /// Allowed CORS origins; `*` allows any.
    pub cors_allowed_origins: Vec<String>,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let text = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse(&var, "PORT", 3000, "u16")?,
            database_url: var("DATABASE_URL"),
            db_max_connections: parse(&var, "DB_MAX_CONNECTIONS", 10, "u32")?,
            db_min_connections: parse(&var, "DB_MIN_CONNECTIONS", 1, "u32")?,
            openrouter_api_key: var("OPENROUTER_API_KEY")
                .ok_or(ConfigError::Missing("OPENROUTER_API_KEY"))?,
            openrouter_url: text("OPENROUTER_URL", DEFAULT_ENDPOINT),
            openrouter_referer: var("OPENROUTER_REFERER"),
            default_model: text("DEFAULT_MODEL", "mistralai/mistral-7b-instruct"),
            model_timeout: Duration::from_secs(parse(&var, "MODEL_TIMEOUT_SECS", 120, "u64")?),
            max_body_bytes: parse(&var, "MAX_BODY_BYTES", 64 * 1024, "usize")?,
            cors_allowed_origins: text("CORS_ALLOWED_ORIGINS", "*")
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            log_level: text("LOG_LEVEL", "info"),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match var(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}
