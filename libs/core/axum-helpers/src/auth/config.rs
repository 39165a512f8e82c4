//! API key configuration.

use core_config::{ConfigError, FromEnv, env_or_default};

/// Shared secret used when `API_KEY` is not set.
pub const DEFAULT_API_KEY: &str = "secret-api-key-123";

/// Shared-secret configuration for the `x-api-key` header.
///
/// Loaded from environment variables:
/// - `API_KEY` (optional, defaults to [`DEFAULT_API_KEY`]); an empty value is rejected
///
/// # Example
///
/// ```ignore
/// use axum_helpers::ApiKeyConfig;
/// use core_config::FromEnv;
///
/// let config = ApiKeyConfig::from_env()?;
/// let config = ApiKeyConfig::new("test-key");
/// ```
#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    pub secret: String,
}

impl ApiKeyConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_or_default("API_KEY", DEFAULT_API_KEY);

        if secret.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self { secret })
    }
}
