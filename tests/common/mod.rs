#![allow(dead_code)]

use std::time::Duration;
use httpmock::MockServer;
use recipe_chef::{Config, GeminiClient};
use serde_json::{json, Value};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-test";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// A simulated Gemini upstream and a client pointed at it.
pub struct TestEnvironment {
    pub server: MockServer,
    pub config: Config,
    pub client: GeminiClient,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start_async().await;
        let config = test_config(&server.base_url()).with_request_timeout(timeout);
        let client = GeminiClient::new(&config).expect("Failed to build client");

        Self {
            server,
            config,
            client,
        }
    }
}

pub fn test_config(base_url: &str) -> Config {
    Config::new(TEST_API_KEY)
        .with_base_url(base_url)
        .with_model(TEST_MODEL)
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_client() -> GeminiClient {
    let config = test_config("http://127.0.0.1:1").with_request_timeout(Duration::from_secs(2));
    GeminiClient::new(&config).expect("Failed to build client")
}

/// Minimal successful `generateContent` body carrying `text`.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 42,
            "candidatesTokenCount": 7,
            "totalTokenCount": 49
        }
    })
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
