/*!
 * Client implementations for the language detection service.
 *
 * - `HttpLanguageDetector`: POSTs caption text to a detection API
 * - `MockLanguageDetector`: canned answers for tests
 */

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, header};
use serde::Deserialize;

use crate::errors::LanguageCheckError;

/// Common trait for language detection backends
#[async_trait]
pub trait LanguageDetector: Send + Sync + Debug {
    /// Detect the language of `text`, returning a tag such as `en-US`
    async fn detect(&self, text: &str) -> Result<String, LanguageCheckError>;
}

/// Response body of the detection API
#[derive(Debug, Deserialize)]
pub struct LanguageResponse {
    /// Detected language tag
    pub lang: String,
}

/// Language detector backed by an HTTP API.
///
/// The API takes the plain text as a `text/plain` POST body and answers
/// `{"lang": "<tag>"}` with status 200.
#[derive(Debug)]
pub struct HttpLanguageDetector {
    /// HTTP client for API requests
    client: Client,
    /// Detection endpoint URL
    endpoint: String,
}

impl HttpLanguageDetector {
    /// Create a new detector for the given endpoint.
    ///
    /// Fails when the HTTP client cannot be built with the requested timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LanguageCheckError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LanguageCheckError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint this detector talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LanguageDetector for HttpLanguageDetector {
    async fn detect(&self, text: &str) -> Result<String, LanguageCheckError> {
        debug!("Sending {} bytes to language API {}", text.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(text.to_string())
            .send()
            .await
            .map_err(|e| LanguageCheckError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Language API error ({}): {}", status, body);
            return Err(LanguageCheckError::ApiError {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let language_response = response
            .json::<LanguageResponse>()
            .await
            .map_err(|e| LanguageCheckError::ParseError(e.to_string()))?;

        Ok(language_response.lang)
    }
}

/// Behavior mode for the mock detector
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always answers with the given tag
    Fixed(String),
    /// Always fails with an API error
    Failing,
}

/// Mock detector for testing language validation
#[derive(Debug)]
pub struct MockLanguageDetector {
    behavior: MockBehavior,
    request_count: AtomicUsize,
}

impl MockLanguageDetector {
    /// Create a new mock detector with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always detects `tag`
    pub fn fixed(tag: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(tag.into()))
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of detection requests received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageDetector for MockLanguageDetector {
    async fn detect(&self, _text: &str) -> Result<String, LanguageCheckError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Fixed(tag) => Ok(tag.clone()),
            MockBehavior::Failing => Err(LanguageCheckError::ApiError {
                status_code: 500,
                message: "Mock language API failure".to_string(),
            }),
        }
    }
}
