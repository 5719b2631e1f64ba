//! GeminiClient -- concrete [`ReplyProvider`] implementation for the Google
//! generative-language API.
//!
//! Sends one `generateContent` request per prompt with a fixed generation
//! configuration. The API key is wrapped in [`secrecy::SecretString`], is
//! carried in the `x-goog-api-key` header, and never appears in Debug
//! output or logs.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use banter_core::reply::provider::ReplyProvider;
use banter_types::error::ReplyError;

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, SafetySetting};

/// Gemini generative-language reply provider.
///
/// Implements [`ReplyProvider`] for the `generateContent` endpoint. Every
/// failure mode maps to a typed [`ReplyError`]; the chat service downstream
/// converts those to fixed user-facing fallback text.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Upstream request deadline. Expiry feeds the same fallback branch as
    /// any other transport failure.
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Model identifier appended to the endpoint path.
    const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";

    /// Create a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    /// The model this client targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full `generateContent` URL.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Wrap a prompt in the fixed request envelope.
    fn request_body(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::fixed(),
            safety_settings: SafetySetting::defaults(),
        }
    }

    fn map_error_status(status: u16) -> ReplyError {
        match status {
            400 => ReplyError::BadRequest,
            403 => ReplyError::Unauthorized,
            other => ReplyError::Upstream { status: other },
        }
    }
}

// GeminiClient intentionally does NOT derive Debug; the SecretString field
// keeps the key out of output either way, but omitting Debug entirely closes
// the door on the surrounding fields too.

impl ReplyProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ReplyError> {
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReplyError::Timeout
                } else {
                    ReplyError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "generateContent returned an error status");
            return Err(Self::map_error_status(status.as_u16()));
        }

        let decoded: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ReplyError::Deserialization(e.to_string()))?;

        let reply = decoded.joined_text();
        if reply.is_empty() {
            return Err(ReplyError::EmptyCompletion);
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GeminiClient {
        GeminiClient::new(SecretString::from("test-key".to_string()))
    }

    #[test]
    fn test_url_includes_model_and_action() {
        let client = test_client();
        assert_eq!(
            client.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );

        let proxied = test_client().with_base_url("http://localhost:9090".to_string());
        assert_eq!(
            proxied.url(),
            "http://localhost:9090/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            GeminiClient::map_error_status(400),
            ReplyError::BadRequest
        ));
        assert!(matches!(
            GeminiClient::map_error_status(403),
            ReplyError::Unauthorized
        ));
        assert!(matches!(
            GeminiClient::map_error_status(429),
            ReplyError::Upstream { status: 429 }
        ));
        assert!(matches!(
            GeminiClient::map_error_status(503),
            ReplyError::Upstream { status: 503 }
        ));
    }

    #[test]
    fn test_request_body_carries_prompt() {
        let body = GeminiClient::request_body("What is Rust?");
        assert_eq!(body.contents.len(), 1);
        assert_eq!(body.contents[0].parts[0].text, "What is Rust?");
    }
}
