//! Configuration for Products API

use axum_helpers::ApiKeyConfig;
use core_config::{server::ServerConfig, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
    pub api_key: ApiKeyConfig,
}

impl Config {
    /// Read `HOST`, `PORT`, `APP_ENV` and `API_KEY`.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let api_key = ApiKeyConfig::from_env()?;

        Ok(Self {
            server,
            environment,
            api_key,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            environment: Environment::Development,
            api_key: ApiKeyConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_is_empty() {
        temp_env::with_vars_unset(["HOST", "PORT", "APP_ENV", "API_KEY"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.api_key.secret, "secret-api-key-123");
        });
    }

    #[test]
    fn test_reads_overrides() {
        temp_env::with_vars(
            [
                ("PORT", Some("8081")),
                ("APP_ENV", Some("production")),
                ("API_KEY", Some("s3cret")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 8081);
                assert!(config.environment.is_production());
                assert_eq!(config.api_key.secret, "s3cret");
            },
        );
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_empty_api_key_is_an_error() {
        temp_env::with_var("API_KEY", Some(""), || {
            assert!(Config::from_env().is_err());
        });
    }
}
