use async_trait::async_trait;

/// Errors from a TTS provider call. Authentication rejections are kept
/// separate so callers can tell a bad credential from a flaky endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("TTS authentication rejected: {0}")]
    Auth(String),
    #[error("TTS call failed: {0}")]
    Call(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (ElevenLabs, Polly, etc.)
///
/// Implementations are responsible for:
/// - Collecting the provider's streamed response into one buffer
/// - Rejecting empty audio (a silent/failed synthesis, not valid silence)
/// - Provider-specific voice and model selection
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize one scene's narration.
    ///
    /// Returns the complete audio data (MP3). No retry: any failure
    /// aborts the scene and the whole run.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError>;
}
