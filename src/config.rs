use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Where and how to load the recipe of the day
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Page location the document path is resolved against
    #[serde(default = "default_location")]
    pub location: String,
    /// Relative path of the recipe document
    #[serde(default = "default_document")]
    pub document: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            document: default_document(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_location() -> String {
    "http://localhost:8000/".to_string()
}

fn default_document() -> String {
    "recette_du_jour.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. recipe.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__LOCATION
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The request timeout; zero would fail every fetch, so it is rejected.
    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::Message(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(Duration::from_secs(self.timeout))
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the priority order.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe").required(false))
        .add_source(
            Environment::with_prefix("RECIPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
