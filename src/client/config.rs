//! Client configuration

use crate::client::errors::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default optimizer service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Key accepted by the service in demo mode
pub const DEFAULT_API_KEY: &str = "demo";
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_TARGET_LANGUAGE: &str = "zh";

/// Per-endpoint request timeouts, in seconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timeouts {
    pub health: u64,
    pub optimize: u64,
    pub save: u64,
    pub batch: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            health: 10,
            optimize: 30,
            save: 10,
            batch: 10,
        }
    }
}

impl Timeouts {
    pub fn health_duration(&self) -> Duration {
        Duration::from_secs(self.health)
    }

    pub fn optimize_duration(&self) -> Duration {
        Duration::from_secs(self.optimize)
    }

    pub fn save_duration(&self) -> Duration {
        Duration::from_secs(self.save)
    }

    pub fn batch_duration(&self) -> Duration {
        Duration::from_secs(self.batch)
    }
}

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root, without a trailing `/api`
    pub base_url: String,
    /// Sent as `Authorization: Bearer <api_key>`
    pub api_key: String,
    /// Model
    pub model: String,
    pub temperature: f64,
    /// Two-letter translation target, `None` disables translation
    pub target_language: Option<String>,
    pub include_metrics: bool,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            target_language: Some(DEFAULT_TARGET_LANGUAGE.to_string()),
            include_metrics: true,
            timeouts: Timeouts::default(),
        }
    }
}

impl ClientConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("base URL '{}' is invalid: {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ClientError::InvalidConfig(format!(
                    "base URL must use http:// or https://, got: {}",
                    scheme
                )));
            }
        }

        if url.host_str().is_none() {
            return Err(ClientError::InvalidConfig(
                "base URL must have a host".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ClientError::InvalidConfig(format!(
                "temperature must be between 0 and 2, got: {}",
                self.temperature
            )));
        }

        if let Some(language) = &self.target_language {
            if language.chars().count() != 2 {
                return Err(ClientError::InvalidConfig(format!(
                    "target language must be a two-letter code, got: {}",
                    language
                )));
            }
        }

        let t = &self.timeouts;
        if [t.health, t.optimize, t.save, t.batch].contains(&0) {
            return Err(ClientError::InvalidConfig(
                "timeouts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Join an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Configuration
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = temperature;
        self
    }

    pub fn target_language(mut self, language: Option<&str>) -> Self {
        self.config.target_language = language.map(str::to_string);
        self
    }

    pub fn include_metrics(mut self, include: bool) -> Self {
        self.config.include_metrics = include;
        self
    }

    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.config.timeouts = timeouts;
        self
    }

    /// Shorthand for the optimize timeout, the one tests most often shrink
    pub fn optimize_timeout(mut self, secs: u64) -> Self {
        self.config.timeouts.optimize = secs;
        self
    }

    /// Configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
