// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Cohere v2 Chat API.
//!
//! Provides [`CohereClient`] which handles request construction,
//! authentication, bounded fixed-delay retry, and response validation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::{debug, warn};

use queryflow_config::CohereConfig;
use queryflow_core::{CompletionProvider, QueryflowError, RetryDelay, TokioDelay};

use crate::types::{ApiErrorResponse, ChatMessage, ChatRequest, ChatResponse};

/// Base URL for the Cohere v2 Chat API.
const API_BASE_URL: &str = "https://api.cohere.com/v2/chat";

/// Environment variable consulted when no API key is configured.
const API_KEY_ENV: &str = "COHERE_API_KEY";

/// HTTP request timeout. Generous because completions can take a while.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Failure of one completion attempt. Every variant consumes one unit of
/// the retry budget, including a transport-successful call whose content
/// turned out to be empty.
#[derive(Debug, Error)]
enum AttemptError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("failed to decode API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("API returned empty response content")]
    EmptyContent,
}

/// HTTP client for Cohere chat completions.
///
/// Retries every attempt failure up to `max_attempts` times with a fixed
/// delay in between -- a simple bounded linear loop, deliberately not
/// exponential, reflecting a best-effort single external dependency. Retry
/// state lives in local variables, so each call is independent.
#[derive(Clone)]
pub struct CohereClient {
    client: reqwest::Client,
    model: String,
    max_attempts: u32,
    retry_delay: Duration,
    base_url: String,
    delay: Arc<dyn RetryDelay>,
}

impl std::fmt::Debug for CohereClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CohereClient")
            .field("model", &self.model)
            .field("max_attempts", &self.max_attempts)
            .field("retry_delay", &self.retry_delay)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CohereClient {
    /// Creates a new Cohere chat client.
    ///
    /// # Arguments
    /// * `api_key` - Cohere API key for bearer authentication
    /// * `model` - Model identifier sent with every request
    /// * `max_attempts` - Retry budget per completion request (>= 1)
    /// * `retry_delay` - Fixed wait between attempts
    pub fn new(
        api_key: String,
        model: String,
        max_attempts: u32,
        retry_delay: Duration,
    ) -> Result<Self, QueryflowError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| QueryflowError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert("authorization", auth);
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| QueryflowError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            model,
            max_attempts: max_attempts.max(1),
            retry_delay,
            base_url: API_BASE_URL.to_string(),
            delay: Arc::new(TokioDelay),
        })
    }

    /// Builds a client from the `[cohere]` config section.
    ///
    /// The API key comes from `cohere.api_key` or, failing that, the
    /// `COHERE_API_KEY` environment variable; neither being set is a
    /// construction-time configuration error.
    pub fn from_config(config: &CohereConfig) -> Result<Self, QueryflowError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                QueryflowError::Config(format!(
                    "Cohere API key not found; set cohere.api_key or the {API_KEY_ENV} environment variable"
                ))
            })?;

        Self::new(
            api_key,
            config.model.clone(),
            config.max_attempts,
            Duration::from_millis(config.retry_delay_ms),
        )
    }

    /// Overrides the base URL (for testing against a local mock server).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Overrides the retry delay implementation (for deterministic tests).
    pub fn with_delay(mut self, delay: Arc<dyn RetryDelay>) -> Self {
        self.delay = delay;
        self
    }

    /// Runs one attempt: POST, status check, decode, content validation.
    async fn attempt(&self, request: &ChatRequest) -> Result<String, AttemptError> {
        let response = self.client.post(&self.base_url).json(request).send().await?;

        let status = response.status();
        debug!(status = %status, "chat response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => api_err.message,
                Err(_) => body,
            };
            return Err(AttemptError::Status { status, message });
        }

        let body = response.text().await?;
        let chat: ChatResponse =
            serde_json::from_str(&body).map_err(AttemptError::Decode)?;

        let text = chat.message.content.joined();
        if text.trim().is_empty() {
            // Transport-wise the call succeeded, but empty content is
            // invalid and consumes an attempt like any other failure.
            return Err(AttemptError::EmptyContent);
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionProvider for CohereClient {
    async fn complete(&self, prompt: &str) -> Result<String, QueryflowError> {
        if prompt.trim().is_empty() {
            return Err(QueryflowError::EmptyPrompt);
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        let mut last_error: Option<AttemptError> = None;

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                debug!(attempt, "retrying chat request after failure");
                self.delay.wait(self.retry_delay).await;
            }

            match self.attempt(&request).await {
                Ok(text) => return Ok(text),
                Err(err) => {
                    warn!(attempt, error = %err, "chat attempt failed");
                    last_error = Some(err);
                }
            }
        }

        let last = last_error
            .ok_or_else(|| QueryflowError::Internal("retry loop ran zero attempts".into()))?;
        Err(QueryflowError::ServiceFailure {
            attempts: self.max_attempts,
            message: last.to_string(),
            source: Some(Box::new(last)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queryflow_test_utils::RecordingDelay;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str, max_attempts: u32) -> (CohereClient, Arc<RecordingDelay>) {
        let delay = Arc::new(RecordingDelay::new());
        let client = CohereClient::new(
            "test-api-key".into(),
            "command-r-plus-08-2024".into(),
            max_attempts,
            Duration::from_millis(100),
        )
        .unwrap()
        .with_base_url(base_url.to_string())
        .with_delay(delay.clone());
        (client, delay)
    }

    fn text_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "message": {
                "role": "assistant",
                "content": [{"type": "text", "text": text}]
            }
        })
    }

    #[tokio::test]
    async fn complete_returns_joined_text_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("Hi there!")))
            .expect(1)
            .mount(&server)
            .await;

        let (client, delay) = test_client(&server.uri(), 3);
        let text = client.complete("Hello").await.unwrap();
        assert_eq!(text, "Hi there!");
        assert_eq!(delay.count(), 0);
    }

    #[tokio::test]
    async fn complete_handles_plain_string_content() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"message": {"content": "plain string reply"}});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (client, _) = test_client(&server.uri(), 1);
        assert_eq!(
            client.complete("Hello").await.unwrap(),
            "plain string reply"
        );
    }

    #[tokio::test]
    async fn segments_are_concatenated_in_order() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "message": {
                "content": [
                    {"type": "text", "text": "Use "},
                    {"type": "text", "text": "a linked list."}
                ]
            }
        });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (client, _) = test_client(&server.uri(), 1);
        assert_eq!(client.complete("q").await.unwrap(), "Use a linked list.");
    }

    #[tokio::test]
    async fn empty_prompt_fails_without_any_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let (client, delay) = test_client(&server.uri(), 3);
        for prompt in ["", "   ", "\n\t"] {
            let err = client.complete(prompt).await.unwrap_err();
            assert_eq!(err.kind(), "EmptyPrompt");
        }
        assert_eq!(delay.count(), 0);
    }

    #[tokio::test]
    async fn k_failures_then_success_performs_k_plus_one_calls_and_k_delays() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({"message": "service overloaded"});

        // First two requests fail, third succeeds.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_json(&error_body))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("recovered")))
            .expect(1)
            .mount(&server)
            .await;

        let (client, delay) = test_client(&server.uri(), 3);
        let text = client.complete("q").await.unwrap();
        assert_eq!(text, "recovered");
        assert_eq!(delay.count(), 2);
        assert_eq!(
            delay.waits(),
            vec![Duration::from_millis(100), Duration::from_millis(100)]
        );
    }

    #[tokio::test]
    async fn exhausted_attempts_surface_service_failure_with_last_error() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({"message": "rate limited"});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(&error_body))
            .expect(3)
            .mount(&server)
            .await;

        let (client, delay) = test_client(&server.uri(), 3);
        let err = client.complete("q").await.unwrap_err();
        match err {
            QueryflowError::ServiceFailure {
                attempts, message, ..
            } => {
                assert_eq!(attempts, 3);
                assert!(message.contains("rate limited"), "got: {message}");
            }
            other => panic!("expected ServiceFailure, got {other:?}"),
        }
        assert_eq!(delay.count(), 2);
    }

    #[tokio::test]
    async fn empty_content_consumes_an_attempt_and_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("")))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("second try")))
            .expect(1)
            .mount(&server)
            .await;

        let (client, delay) = test_client(&server.uri(), 2);
        assert_eq!(client.complete("q").await.unwrap(), "second try");
        assert_eq!(delay.count(), 1);
    }

    #[tokio::test]
    async fn malformed_payload_is_a_failure_for_retry_purposes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"unexpected\": true}"))
            .expect(2)
            .mount(&server)
            .await;

        let (client, _) = test_client(&server.uri(), 2);
        let err = client.complete("q").await.unwrap_err();
        assert_eq!(err.kind(), "ServiceFailure");
        assert!(err.to_string().contains("2 attempt"), "got: {err}");
    }

    #[tokio::test]
    async fn client_sends_bearer_auth_and_single_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "model": "command-r-plus-08-2024",
                "messages": [{"role": "user", "content": "the prompt"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = test_client(&server.uri(), 1);
        let result = client.complete("the prompt").await;
        assert!(result.is_ok(), "headers/body should match: {result:?}");
    }

    #[tokio::test]
    async fn from_config_requires_an_api_key() {
        let config = CohereConfig {
            api_key: None,
            ..CohereConfig::default()
        };
        // Only meaningful when the env var is absent in the test environment.
        if std::env::var(API_KEY_ENV).is_err() {
            let err = CohereClient::from_config(&config).unwrap_err();
            assert_eq!(err.kind(), "ConfigError");
        }
        let configured = CohereConfig {
            api_key: Some("key-from-config".into()),
            ..CohereConfig::default()
        };
        assert!(CohereClient::from_config(&configured).is_ok());
    }
}
