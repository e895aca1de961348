use std::str::FromStr;
use std::time::Duration;

/// Error raised when the environment does not describe a usable server.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Where and how to reach the recommendation service.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Full URL of the recommendation endpoint, requested verbatim.
    pub url: String,
    /// Timeout for proxied `/recommendation` calls.
    pub timeout: Duration,
    /// Timeout for the health probe.
    pub probe_timeout: Duration,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub recommendation: RecommendationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                             | Default                 |
    /// |-------------------------------------|-------------------------|
    /// | `DATABASE_URL`                      | required                |
    /// | `RECOMMENDATION_SERVICE_URL`        | required                |
    /// | `HOST`                              | `0.0.0.0`               |
    /// | `PORT`                              | `8000`                  |
    /// | `CORS_ORIGINS`                      | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`              | `30`                    |
    /// | `RECOMMENDATION_TIMEOUT_SECS`       | `10`                    |
    /// | `RECOMMENDATION_PROBE_TIMEOUT_SECS` | `2`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let database_url = required("DATABASE_URL")?;
        let recommendation_url = required("RECOMMENDATION_SERVICE_URL")?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 8000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let timeout_secs: u64 = parse_or(&lookup, "RECOMMENDATION_TIMEOUT_SECS", 10)?;
        let probe_timeout_secs: u64 = parse_or(&lookup, "RECOMMENDATION_PROBE_TIMEOUT_SECS", 2)?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            recommendation: RecommendationConfig {
                url: recommendation_url,
                timeout: Duration::from_secs(timeout_secs),
                probe_timeout: Duration::from_secs(probe_timeout_secs),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
