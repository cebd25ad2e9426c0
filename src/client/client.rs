//! HTTP client for the optimizer service

use crate::client::config::ClientConfig;
use crate::client::errors::{ClientError, Result};
use crate::client::types::*;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const OPTIMIZE_PATH: &str = "/api/v1/optimize";
pub const BATCH_PATH: &str = "/api/v1/optimize/batch";
pub const SAVE_PATH: &str = "/api/save-prompt";

/// Thin client over the optimizer REST API
///
/// Each call carries its own timeout; there are no retries.
#[derive(Debug, Clone)]
pub struct OptimizerClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl OptimizerClient {
    /// Create a client, validating the configuration first
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        info!("OptimizerClient created for {}", config.base_url);

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the optimize payload for a prompt using the configured defaults
    pub fn request_for(&self, prompt: &str, strategy: Strategy) -> OptimizationRequest {
        OptimizationRequest {
            prompt: prompt.to_string(),
            strategy,
            target_language: self.config.target_language.clone(),
            include_metrics: self.config.include_metrics,
            model: self.config.model.clone(),
            temperature: self.config.temperature,
        }
    }

    /// Build a batch payload; prompts beyond the service limit are dropped
    pub fn batch_request_for(&self, prompts: &[(&str, Strategy)]) -> BatchOptimizeRequest {
        if prompts.len() > MAX_BATCH_PROMPTS {
            warn!(
                "Batch of {} prompts truncated to {}",
                prompts.len(),
                MAX_BATCH_PROMPTS
            );
        }

        let prompts = prompts
            .iter()
            .take(MAX_BATCH_PROMPTS)
            .enumerate()
            .map(|(index, (content, strategy))| BatchPrompt {
                id: Some(format!("prompt_{}", index + 1)),
                content: content.to_string(),
                strategy: *strategy,
                target_language: self.config.target_language.clone(),
                model: self.config.model.clone(),
                temperature: self.config.temperature,
            })
            .collect();

        BatchOptimizeRequest {
            prompts,
            options: BatchOptions::default(),
        }
    }

    /// `GET /api/v1/optimize`
    pub async fn service_info(&self) -> Result<ServiceInfo> {
        self.get_json(OPTIMIZE_PATH, self.config.timeouts.health_duration())
            .await
    }

    /// `POST /api/v1/optimize`
    pub async fn optimize(&self, request: &OptimizationRequest) -> Result<OptimizationResult> {
        self.post_json(
            OPTIMIZE_PATH,
            request,
            self.config.timeouts.optimize_duration(),
            true,
        )
        .await
    }

    /// `POST /api/save-prompt`
    pub async fn save(&self, record: &SaveRecord) -> Result<SaveResponse> {
        self.post_json(SAVE_PATH, record, self.config.timeouts.save_duration(), false)
            .await
    }

    /// `GET /api/v1/optimize/batch`
    pub async fn batch_info(&self) -> Result<BatchInfo> {
        self.get_json(BATCH_PATH, self.config.timeouts.batch_duration())
            .await
    }

    /// `POST /api/v1/optimize/batch`
    ///
    /// A batch runs several optimizations server-side, so it gets the optimize
    /// timeout rather than the probe timeout.
    pub async fn optimize_batch(
        &self,
        request: &BatchOptimizeRequest,
    ) -> Result<BatchOptimizeResponse> {
        self.post_json(
            BATCH_PATH,
            request,
            self.config.timeouts.optimize_duration(),
            true,
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, timeout: Duration) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout.as_secs()))?;

        Self::decode(response, timeout).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
        authenticated: bool,
    ) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);

        let mut request = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(timeout)
            .json(body);

        if authenticated {
            request = request.header(AUTHORIZATION, format!("Bearer {}", self.config.api_key));
        }

        let start = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout.as_secs()))?;
        debug!(
            "POST {} -> {} in {:?}",
            url,
            response.status(),
            start.elapsed()
        );

        Self::decode(response, timeout).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, timeout: Duration) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout.as_secs()))?;

        // Only a plain 200 counts; 201/202/204 are reported like any other status
        if status != StatusCode::OK {
            warn!("Optimizer API error: {} - {}", status, body);
            return Err(ClientError::Api { status, body });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}
