pub mod encoder;
pub mod prober;

use async_trait::async_trait;
use std::path::Path;

/// Capability interface over the external media encoder.
///
/// Implementations take two concat-demuxer manifests (an image list with
/// per-entry display durations and an audio list) and produce a single
/// video file at `output`.
#[async_trait]
pub trait Encoder: Send + Sync {
    async fn encode_slideshow(
        &self,
        image_list: &Path,
        audio_list: &Path,
        output: &Path,
    ) -> Result<(), String>;
}

/// Capability interface over the external media inspection tool.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Return the container duration of `path` in seconds.
    ///
    /// An unparsable duration (e.g. "N/A") maps to `0.0`; the caller
    /// decides whether zero duration is fatal.
    async fn probe_duration(&self, path: &Path) -> Result<f64, String>;
}

pub use encoder::FfmpegEncoder;
pub use prober::FfprobeProber;
