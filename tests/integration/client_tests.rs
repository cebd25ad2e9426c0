//! Optimizer client tests
//!
//! Request shape, response decoding and error classification for each
//! endpoint.

#[cfg(test)]
mod tests {
    use crate::common::MockOptimizer;
    use crate::common::fixtures;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};
    use xiaoprompt_harness::client::{ClientError, ConfigBuilder, OptimizerClient, Strategy};

    #[tokio::test]
    async fn test_service_info_parses_name_and_version() {
        let mock = MockOptimizer::start().await;
        mock.health(200).await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let info = crate::assert_ok!(client.service_info().await);

        assert_eq!(info.name_or_unknown(), "PromptOptimizer API");
        assert_eq!(info.version_or_unknown(), "1.0.0");
    }

    #[tokio::test]
    async fn test_service_info_unavailable() {
        let mock = MockOptimizer::start().await;
        mock.health(503).await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let err = crate::assert_err!(client.service_info().await);

        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_optimize_sends_bearer_token_and_payload() {
        let mock = MockOptimizer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/optimize"))
            .and(header("authorization", "Bearer demo"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::optimization("opt_7", "Short.", 80)),
            )
            .expect(1)
            .mount(&mock.server)
            .await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let request = client.request_for(fixtures::ORIGINAL_PROMPT, Strategy::Technical);
        let result = crate::assert_ok!(client.optimize(&request).await);

        assert_eq!(result.id_or_na(), "opt_7");
        assert_eq!(result.optimized_prompt_or_na(), "Short.");
        assert_eq!(result.tokens_saved(), 80);

        let bodies = mock.bodies_for("/api/v1/optimize").await;
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["strategy"], "technical");
        assert_eq!(bodies[0]["targetLanguage"], "zh");
        assert_eq!(bodies[0]["includeMetrics"], true);
        assert_eq!(bodies[0]["model"], "claude-3-haiku-20240307");
        assert_eq!(bodies[0]["temperature"], 0.3);
    }

    #[tokio::test]
    async fn test_custom_api_key() {
        let mock = MockOptimizer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/optimize"))
            .and(header("authorization", "Bearer team-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::optimization("opt_8", "x", 1)),
            )
            .mount(&mock.server)
            .await;

        let config = ConfigBuilder::new()
            .base_url(mock.uri())
            .api_key("team-key")
            .build();
        let client = OptimizerClient::new(config).unwrap();
        let request = client.request_for("prompt", Strategy::Concise);

        assert!(client.optimize(&request).await.is_ok());
    }

    #[tokio::test]
    async fn test_optimize_timeout() {
        let mock = MockOptimizer::start().await;
        mock.optimize_hangs_for(Strategy::Concise).await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let request = client.request_for("prompt", Strategy::Concise);
        let err = crate::assert_err!(client.optimize(&request).await);

        assert!(err.is_timeout(), "expected timeout, got {:?}", err);
    }

    #[tokio::test]
    async fn test_optimize_malformed_json() {
        let mock = MockOptimizer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/optimize"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock.server)
            .await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let request = client.request_for("prompt", Strategy::Concise);
        let err = crate::assert_err!(client.optimize(&request).await);

        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn test_optimize_api_error_keeps_body() {
        let mock = MockOptimizer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/optimize"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({
                    "error": "Rate limit exceeded",
                    "retryAfter": 60
                })),
            )
            .mount(&mock.server)
            .await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let request = client.request_for("prompt", Strategy::Concise);
        let err = crate::assert_err!(client.optimize(&request).await);

        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert!(err.api_body_pretty().unwrap().contains("Rate limit exceeded"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Nothing listens on the discard port
        let config = ConfigBuilder::new().base_url("http://127.0.0.1:9").build();
        let client = OptimizerClient::new(config).unwrap();

        let err = crate::assert_err!(client.service_info().await);
        assert!(matches!(err, ClientError::Network(_) | ClientError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_save_posts_record() {
        let mock = MockOptimizer::start().await;
        mock.save(200).await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let record = xiaoprompt_harness::client::SaveRecord {
            original_prompt: "long".to_string(),
            optimized_prompt: "short".to_string(),
            original_tokens: 20,
            optimized_tokens: 10,
            tokens_saved: 10,
            money_saved: 0.02,
            energy_saved: 0.0004,
            emissions_saved: 0.0001664,
            user_name: "API Test - Concise".to_string(),
        };
        let response = crate::assert_ok!(client.save(&record).await);
        assert_eq!(response.id_or_na(), "42");

        let bodies = mock.bodies_for("/api/save-prompt").await;
        assert_eq!(bodies[0]["user_name"], "API Test - Concise");
        assert_eq!(bodies[0]["tokens_saved"], 10);
    }

    #[tokio::test]
    async fn test_batch_info_missing() {
        let mock = MockOptimizer::start().await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let err = crate::assert_err!(client.batch_info().await);

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_optimize_batch() {
        let mock = MockOptimizer::start().await;
        mock.batch_ok().await;

        let client = OptimizerClient::new(mock.config()).unwrap();
        let request = client.batch_request_for(&[
            (fixtures::ORIGINAL_PROMPT, Strategy::Concise),
            ("Create a beautiful sunset landscape", Strategy::Creative),
        ]);
        let response = crate::assert_ok!(client.optimize_batch(&request).await);

        assert_eq!(response.successful, Some(1));
        assert_eq!(response.failed, Some(1));
        assert_eq!(response.results.len(), 2);

        let bodies = mock.bodies_for("/api/v1/optimize/batch").await;
        assert_eq!(bodies[0]["prompts"][0]["id"], "prompt_1");
        assert_eq!(bodies[0]["prompts"][1]["strategy"], "creative");
        assert_eq!(bodies[0]["options"]["maxConcurrency"], 5);
    }

    #[test]
    fn test_batch_request_is_capped() {
        let client = OptimizerClient::new(ConfigBuilder::new().build()).unwrap();
        let prompts: Vec<(&str, Strategy)> = (0..15).map(|_| ("p", Strategy::Concise)).collect();

        let request = client.batch_request_for(&prompts);
        assert_eq!(request.prompts.len(), 10);
    }
}
