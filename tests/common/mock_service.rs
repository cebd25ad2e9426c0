//! Mock optimizer service built on wiremock

use super::fixtures;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xiaoprompt_harness::client::{ClientConfig, ConfigBuilder, Strategy, Timeouts};
use xiaoprompt_harness::runner::{CapturedOutput, Reporter, TestRunner};

/// A running mock of the optimizer service
pub struct MockOptimizer {
    pub server: MockServer,
}

impl MockOptimizer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Client config pointing at the mock, with a 1s optimize timeout
    pub fn config(&self) -> ClientConfig {
        ConfigBuilder::new()
            .base_url(self.uri())
            .timeouts(Timeouts {
                health: 2,
                optimize: 1,
                save: 2,
                batch: 2,
            })
            .build()
    }

    /// Runner writing into a buffer
    pub fn runner(&self) -> (TestRunner, CapturedOutput) {
        let (reporter, output) = Reporter::buffered();
        let runner = TestRunner::with_reporter(self.config(), reporter)
            .expect("mock config is valid");
        (runner, output)
    }

    pub async fn health(&self, status: u16) {
        self.health_with(ResponseTemplate::new(status).set_body_json(fixtures::service_info()))
            .await;
    }

    /// Info endpoint answers with an arbitrary response
    pub async fn health_with(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/v1/optimize"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Every optimize call succeeds with the same payload
    pub async fn optimize_ok(&self, tokens_saved: i64) {
        Mock::given(method("POST"))
            .and(path("/api/v1/optimize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::optimization(
                "opt_1",
                "Analyze current AI market trends with examples and data.",
                tokens_saved,
            )))
            .mount(&self.server)
            .await;
    }

    /// Optimize calls for one strategy get a specific response
    pub async fn optimize_for(&self, strategy: Strategy, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/v1/optimize"))
            .and(body_partial_json(json!({ "strategy": strategy.as_str() })))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Optimize calls for one strategy hang past the client timeout
    pub async fn optimize_hangs_for(&self, strategy: Strategy) {
        let response = ResponseTemplate::new(200)
            .set_body_json(fixtures::optimization("opt_slow", "late", 10))
            .set_delay(Duration::from_secs(3));
        self.optimize_for(strategy, response).await;
    }

    pub async fn save(&self, status: u16) {
        let body = if status == 200 {
            fixtures::saved(42)
        } else {
            json!({ "error": "Failed to save prompt to database" })
        };
        Mock::given(method("POST"))
            .and(path("/api/save-prompt"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn batch_info(&self, status: u16) {
        self.batch_info_with(ResponseTemplate::new(status).set_body_json(fixtures::batch_info()))
            .await;
    }

    pub async fn batch_info_with(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/v1/optimize/batch"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn batch_ok(&self) {
        Mock::given(method("POST"))
            .and(path("/api/v1/optimize/batch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::batch_result()))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received on `route`
    pub async fn bodies_for(&self, route: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == route)
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}
