//! API configuration

use serde::Deserialize;

/// Origins of the local development front-ends
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

/// Where policy records are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via `infra_db`
    Postgres,
    /// Process-local store; contents are lost on restart
    Memory,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
    /// Record store
    pub storage: StorageBackend,
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/insurance".to_string(),
            db_max_connections: 10,
            storage: StorageBackend::Postgres,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables keep their defaults. A bare `DATABASE_URL` is honoured
    /// when `API_DATABASE_URL` is absent. `API_ALLOWED_ORIGINS` is a
    /// comma-separated list.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(
            config::Environment::with_prefix("API"),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    fn from_environment(
        environment: config::Environment,
        database_url: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(url) = database_url {
            builder = builder.set_default("database_url", url)?;
        }

        builder
            .add_source(
                environment
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("API").source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:3001"]
        );
    }

    #[test]
    fn test_empty_environment_keeps_defaults() {
        let config = ApiConfig::from_environment(environment(&[]), None).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "postgres://localhost/insurance");
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ApiConfig::from_environment(
            environment(&[
                ("API_PORT", "9090"),
                ("API_STORAGE", "memory"),
                ("API_ALLOWED_ORIGINS", "https://a.example,https://b.example"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.allowed_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_bare_database_url_is_fallback() {
        let config =
            ApiConfig::from_environment(environment(&[]), Some("postgres://db/x".to_string()))
                .unwrap();
        assert_eq!(config.database_url, "postgres://db/x");

        let config = ApiConfig::from_environment(
            environment(&[("API_DATABASE_URL", "postgres://db/y")]),
            Some("postgres://db/x".to_string()),
        )
        .unwrap();
        assert_eq!(config.database_url, "postgres://db/y");
    }
}
