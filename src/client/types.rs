//! Wire types for the optimizer service
//!
//! The optimize API speaks camelCase, the save API snake_case. Response
//! fields are optional: the service omits some of them depending on the
//! request (`metrics` only appears when `includeMetrics` was set), and the
//! harness reports missing values instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder shown for values the service did not return
pub const NOT_AVAILABLE: &str = "N/A";

/// Named optimization mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Concise,
    Creative,
    Technical,
    Multilingual,
}

impl Strategy {
    /// Every strategy, in the order the sweep runs them
    pub const ALL: [Strategy; 4] = [
        Strategy::Concise,
        Strategy::Creative,
        Strategy::Technical,
        Strategy::Multilingual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Concise => "concise",
            Strategy::Creative => "creative",
            Strategy::Technical => "technical",
            Strategy::Multilingual => "multilingual",
        }
    }

    /// Capitalized name, used in saved user names
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::Concise => "Concise",
            Strategy::Creative => "Creative",
            Strategy::Technical => "Technical",
            Strategy::Multilingual => "Multilingual",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concise" => Ok(Strategy::Concise),
            "creative" => Ok(Strategy::Creative),
            "technical" => Ok(Strategy::Technical),
            "multilingual" => Ok(Strategy::Multilingual),
            other => Err(format!("Unknown strategy: {}", other)),
        }
    }
}

/// Body of `POST /api/v1/optimize`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub prompt: String,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    pub include_metrics: bool,
    pub model: String,
    pub temperature: f64,
}

/// Token accounting returned with an optimization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    pub original_tokens: Option<i64>,
    pub optimized_tokens: Option<i64>,
    pub tokens_saved: Option<i64>,
    pub reduction_percentage: Option<f64>,
    pub estimated_cost_savings: Option<f64>,
    pub processing_time_ms: Option<u64>,
    pub model: Option<String>,
}

impl Metrics {
    pub fn original_tokens_or_zero(&self) -> i64 {
        self.original_tokens.unwrap_or(0)
    }

    pub fn optimized_tokens_or_zero(&self) -> i64 {
        self.optimized_tokens.unwrap_or(0)
    }

    pub fn tokens_saved_or_zero(&self) -> i64 {
        self.tokens_saved.unwrap_or(0)
    }

    pub fn reduction_percentage_or_zero(&self) -> f64 {
        self.reduction_percentage.unwrap_or(0.0)
    }

    /// Cost savings as estimated by the service itself
    pub fn estimated_cost_savings_or_zero(&self) -> f64 {
        self.estimated_cost_savings.unwrap_or(0.0)
    }
}

/// Response of `POST /api/v1/optimize`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationResult {
    pub id: Option<String>,
    pub original_prompt: Option<String>,
    pub optimized_prompt: Option<String>,
    pub strategy: Option<Strategy>,
    pub status: Option<String>,
    pub timestamp: Option<String>,
    pub metrics: Option<Metrics>,
}

impl OptimizationResult {
    pub fn id_or_na(&self) -> &str {
        self.id.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn original_prompt_or_na(&self) -> &str {
        self.original_prompt.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn optimized_prompt_or_na(&self) -> &str {
        self.optimized_prompt.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Tokens saved as reported, 0 when metrics are absent
    pub fn tokens_saved(&self) -> i64 {
        self.metrics
            .as_ref()
            .map(Metrics::tokens_saved_or_zero)
            .unwrap_or(0)
    }
}

/// Body of `POST /api/save-prompt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveRecord {
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub original_tokens: i64,
    pub optimized_tokens: i64,
    pub tokens_saved: i64,
    pub money_saved: f64,
    pub energy_saved: f64,
    pub emissions_saved: f64,
    pub user_name: String,
}

/// Stored row echoed back by the save endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SavedPrompt {
    pub id: Option<serde_json::Value>,
    pub user_name: Option<String>,
    pub created_at: Option<String>,
}

/// Response of `POST /api/save-prompt`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SaveResponse {
    pub success: Option<bool>,
    pub data: Option<SavedPrompt>,
}

impl SaveResponse {
    /// Database id of the stored row, rendered for display
    pub fn id_or_na(&self) -> String {
        display_value(self.data.as_ref().and_then(|d| d.id.as_ref()), NOT_AVAILABLE)
    }
}

/// Render a loosely typed JSON field; strings lose their quotes
fn display_value(value: Option<&serde_json::Value>, fallback: &str) -> String {
    match value {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(serde_json::Value::Null) | None => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Response of `GET /api/v1/optimize`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceInfo {
    /// Display only, so any JSON type is accepted
    pub name: Option<serde_json::Value>,
    pub version: Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
}

impl ServiceInfo {
    pub fn name_or_unknown(&self) -> String {
        display_value(self.name.as_ref(), "Unknown")
    }

    pub fn version_or_unknown(&self) -> String {
        display_value(self.version.as_ref(), "Unknown")
    }
}

/// Response of `GET /api/v1/optimize/batch`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchInfo {
    pub endpoint: Option<String>,
    pub description: Option<String>,
    pub max_prompts: Option<usize>,
    pub rate_limit: Option<String>,
}

/// Most prompts the service accepts in one batch
pub const MAX_BATCH_PROMPTS: usize = 10;

/// One prompt inside a batch request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchPrompt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    pub model: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchOptions {
    pub parallel: bool,
    pub max_concurrency: u32,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_concurrency: 5,
        }
    }
}

/// Body of `POST /api/v1/optimize/batch`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchOptimizeRequest {
    pub prompts: Vec<BatchPrompt>,
    pub options: BatchOptions,
}

/// Per-prompt outcome inside a batch response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchItemResult {
    pub id: Option<String>,
    pub original_prompt: Option<String>,
    pub optimized_prompt: Option<String>,
    pub strategy: Option<Strategy>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub metrics: Option<Metrics>,
}

impl BatchItemResult {
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed")
    }
}

/// Response of `POST /api/v1/optimize/batch`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchOptimizeResponse {
    pub batch_id: Option<String>,
    pub total_prompts: Option<usize>,
    pub successful: Option<usize>,
    pub failed: Option<usize>,
    pub processing_time_ms: Option<u64>,
    pub results: Vec<BatchItemResult>,
}
