//! Canned optimizer service payloads

use serde_json::{Value, json};

pub const ORIGINAL_PROMPT: &str = "Please write a comprehensive and detailed analysis of the current market trends in the artificial intelligence industry.";

/// `GET /api/v1/optimize` body
pub fn service_info() -> Value {
    json!({
        "name": "PromptOptimizer API",
        "version": "1.0.0",
        "description": "AI-powered prompt optimization service"
    })
}

/// `POST /api/v1/optimize` body with metrics
pub fn optimization(id: &str, optimized: &str, tokens_saved: i64) -> Value {
    let original_tokens = 1500;
    json!({
        "id": id,
        "originalPrompt": ORIGINAL_PROMPT,
        "optimizedPrompt": optimized,
        "strategy": "concise",
        "status": "completed",
        "metrics": {
            "originalTokens": original_tokens,
            "optimizedTokens": original_tokens - tokens_saved,
            "tokensSaved": tokens_saved,
            "reductionPercentage": 66.7,
            "estimatedCostSavings": tokens_saved as f64 * 0.000005,
            "processingTimeMs": 420,
            "model": "claude-3-haiku-20240307"
        }
    })
}

/// `POST /api/save-prompt` body
pub fn saved(id: i64) -> Value {
    json!({
        "success": true,
        "data": { "id": id, "user_name": "API Test - Concise" }
    })
}

/// `GET /api/v1/optimize/batch` body
pub fn batch_info() -> Value {
    json!({
        "endpoint": "POST /api/v1/optimize/batch",
        "description": "Optimize multiple prompts in a single request",
        "maxPrompts": 10,
        "rateLimit": "10 batches per minute"
    })
}

/// `POST /api/v1/optimize/batch` body, first item completed and second failed
pub fn batch_result() -> Value {
    json!({
        "batchId": "batch_1700000000000",
        "totalPrompts": 2,
        "successful": 1,
        "failed": 1,
        "processingTimeMs": 1800,
        "results": [
            {
                "id": "prompt_1",
                "originalPrompt": ORIGINAL_PROMPT,
                "optimizedPrompt": "Analyze AI market trends.",
                "strategy": "concise",
                "status": "completed",
                "metrics": { "originalTokens": 30, "optimizedTokens": 6, "tokensSaved": 24 }
            },
            {
                "id": "prompt_2",
                "originalPrompt": "Create a beautiful sunset landscape",
                "status": "failed",
                "error": "Model overloaded"
            }
        ]
    })
}
