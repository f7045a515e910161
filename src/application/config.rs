/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_AUTH_SCHEME, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Loop API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Loop REST API
    pub base_url: String,
    /// Timeout in milliseconds for every request
    pub timeout_ms: u64,
    /// Scheme written in front of the token in the `Authorization` header
    pub auth_scheme: String,
}

impl RestApiConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Joins a path onto the base URL, tolerating slashes on either side
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Value of the `Authorization` header for the given token
    #[must_use]
    pub fn authorization(&self, token: &str) -> String {
        format!("{}{}", self.auth_scheme, token)
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            auth_scheme: DEFAULT_AUTH_SCHEME.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// Loads a `.env` file when present, then reads `LOOP_REST_BASE_URL`,
    /// `LOOP_REST_TIMEOUT_MS` and `LOOP_AUTH_SCHEME`, falling back to the
    /// production defaults for anything unset.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("LOOP_REST_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout_ms: get_env_or_default("LOOP_REST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
                auth_scheme: get_env_or_default(
                    "LOOP_AUTH_SCHEME",
                    DEFAULT_AUTH_SCHEME.to_string(),
                ),
            },
        }
    }

    /// Fixed defaults with the given base URL, ignoring the environment
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                ..RestApiConfig::default()
            },
        }
    }
}
