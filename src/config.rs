// Configuration management with layered configuration (file, env)

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure for the extension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub observability: ObservabilityConfig,
}

/// Endpoints and credentials for the downstream certificate API.
///
/// Credentials always come from configuration or the environment; nothing is
/// hard-coded in the jobs themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub token_url: String,
    pub resource_url: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl Settings {
    /// Load configuration with layered precedence: defaults → file → env
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from_path<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default configuration
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add local configuration (not committed to git)
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment-specific configuration
            .add_source(
                Environment::with_prefix("CUSTOM_JOB")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        if self.api.token_url.is_empty() {
            return Err("API token_url cannot be empty".to_string());
        }
        if self.api.resource_url.is_empty() {
            return Err("API resource_url cannot be empty".to_string());
        }
        if self.api.client_id.is_empty() {
            return Err("API client_id cannot be empty".to_string());
        }
        // client_secret may be empty for public clients
        if self.api.timeout_seconds == 0 {
            return Err("API timeout_seconds must be greater than 0".to_string());
        }
        if self.observability.log_level.is_empty() {
            return Err("Observability log_level cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                token_url: "https://localhost:8443/oauth/token".to_string(),
                resource_url: "https://localhost:8443/api/resources/4".to_string(),
                client_id: "custom-job-client".to_string(),
                client_secret: String::new(),
                timeout_seconds: default_timeout_seconds(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}
