//! Application configuration.
//!
//! Loaded from environment variables with sensible defaults, so the
//! server starts with zero configuration in development.

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DATABASE_URL: &str = "sqlite:database.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service name used in logs and responses.
    pub service_name: String,
    /// Bind host (`SERVER_HOST`).
    pub host: String,
    /// Bind port (`SERVER_PORT`, default set by the binary).
    pub port: u16,
    /// SQLx URL of the local relational store (`DATABASE_URL`).
    pub database_url: String,
    /// Maximum pool size for the local store (`DATABASE_MAX_CONNECTIONS`).
    pub max_connections: u32,
}

impl AppConfig {
    /// Loads configuration from the environment for the given service.
    pub fn load_with_service(service: &str) -> Self {
        Self {
            service_name: service.to_string(),
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: 0,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load_with_service("test-service");
        assert_eq!(config.service_name, "test-service");
        assert!(!config.host.is_empty());
        assert!(config.max_connections >= 1);
    }
}
