use super::image_repository::ImageRepository;
use crate::domain::pipeline::style::style_for_subject;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

const MODEL_ID: &str = "stabilityai/stable-diffusion-xl-base-1.0";

/// Retry policy for transient "model warming up" responses.
///
/// The inference API answers 503 while a cold model loads; that is the
/// only retryable condition. Everything else is terminal on first
/// occurrence.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn is_retryable(&self, status: StatusCode) -> bool {
        status == StatusCode::SERVICE_UNAVAILABLE
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff: Duration::from_secs(20),
        }
    }
}

/// Hugging Face Inference API implementation of the image repository.
pub struct HuggingFaceImageRepository {
    http: reqwest::Client,
    api_token: String,
    base_url: String,
    retry: RetryPolicy,
}

impl HuggingFaceImageRepository {
    pub fn new(http: reqwest::Client, api_token: String) -> Self {
        Self::with_base_url(http, api_token, DEFAULT_BASE_URL.to_string(), RetryPolicy::default())
    }

    pub fn with_base_url(
        http: reqwest::Client,
        api_token: String,
        base_url: String,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            http,
            api_token,
            base_url,
            retry,
        }
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, MODEL_ID)
    }

    /// Build the style-conditioned prompt for one scene.
    fn build_prompt(text: &str, subject: &str) -> String {
        format!(
            "{} illustration for a study note: {} Style: {}.",
            subject,
            text,
            style_for_subject(subject)
        )
    }
}

#[async_trait]
impl ImageRepository for HuggingFaceImageRepository {
    async fn synthesize(&self, text: &str, subject: &str) -> Result<Vec<u8>, String> {
        let prompt = Self::build_prompt(text, subject);

        let mut attempt = 0;
        loop {
            tracing::info!(
                model = MODEL_ID,
                attempt = attempt,
                prompt_length = prompt.len(),
                "Calling image generation endpoint"
            );

            let response = self
                .http
                .post(self.model_url())
                .bearer_auth(&self.api_token)
                .json(&json!({ "inputs": prompt }))
                .send()
                .await
                .map_err(|e| format!("Image generation request failed: {}", e))?;

            let status = response.status();
            if status.is_success() {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read image bytes: {}", e))?;
                tracing::info!(
                    image_size_bytes = bytes.len(),
                    attempt = attempt,
                    "Image generated"
                );
                return Ok(bytes.to_vec());
            }

            let body = response.text().await.unwrap_or_default();

            if self.retry.is_retryable(status) && attempt < self.retry.max_retries {
                tracing::warn!(
                    status = %status,
                    backoff_secs = self.retry.backoff.as_secs(),
                    "Image model warming up, retrying after backoff"
                );
                tokio::time::sleep(self.retry.backoff).await;
                attempt += 1;
                continue;
            }

            // Terminal: keep the response body for diagnostics
            return Err(format!(
                "Image generation failed with status {}: {}",
                status, body
            ));
        }
    }
}
