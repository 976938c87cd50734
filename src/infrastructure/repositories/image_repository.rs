use async_trait::async_trait;

/// Repository for text-to-image generation.
///
/// Implementations build the style-conditioned prompt from the scene
/// text and subject tag, and own the "model warming" retry policy.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Generate one scene's illustration. Returns encoded image bytes.
    async fn synthesize(&self, text: &str, subject: &str) -> Result<Vec<u8>, String>;
}
