use super::tts_repository::{TtsError, TtsRepository};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Fixed narration voice ("Rachel") and multilingual model.
const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
const MODEL_ID: &str = "eleven_multilingual_v2";

/// ElevenLabs implementation of the TTS repository, against the
/// streaming synthesis endpoint.
pub struct ElevenLabsTtsRepository {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsTtsRepository {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self::with_base_url(http, api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(http: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    fn stream_url(&self) -> String {
        format!("{}/v1/text-to-speech/{}/stream", self.base_url, VOICE_ID)
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = VOICE_ID,
            model = MODEL_ID,
            text_length = text.len(),
            "Calling ElevenLabs text-to-speech"
        );

        let response = self
            .http
            .post(self.stream_url())
            .header("xi-api-key", &self.api_key)
            .json(&json!({
                "text": text,
                "model_id": MODEL_ID,
            }))
            .send()
            .await
            .map_err(|e| TtsError::Call(format!("ElevenLabs request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Auth(format!(
                "ElevenLabs rejected credentials ({}): {}",
                status, body
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Call(format!(
                "ElevenLabs returned {}: {}",
                status, body
            )));
        }

        // Collect the streamed response into one buffer
        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| TtsError::Call(format!("Failed to read audio stream: {}", e)))?
            .to_vec();

        // An empty buffer means the synthesis silently failed
        if audio_bytes.is_empty() {
            return Err(TtsError::Call(
                "ElevenLabs returned an empty audio stream".to_string(),
            ));
        }

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "elevenlabs",
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
