use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use super::Encoder;

/// ffmpeg-backed slideshow encoder using two concat-demuxer inputs.
pub struct FfmpegEncoder {
    ffmpeg_path: String,
}

impl FfmpegEncoder {
    pub fn new(ffmpeg_path: String) -> Self {
        Self { ffmpeg_path }
    }
}

#[async_trait]
impl Encoder for FfmpegEncoder {
    async fn encode_slideshow(
        &self,
        image_list: &Path,
        audio_list: &Path,
        output: &Path,
    ) -> Result<(), String> {
        tracing::info!(
            image_list = %image_list.display(),
            audio_list = %audio_list.display(),
            output = %output.display(),
            "Encoding slideshow video"
        );

        let result = Command::new(&self.ffmpeg_path)
            .args(["-y", "-f", "concat", "-safe", "0"])
            .arg("-i")
            .arg(image_list.as_os_str())
            .args(["-f", "concat", "-safe", "0"])
            .arg("-i")
            .arg(audio_list.as_os_str())
            .args([
                "-c:v",
                "libx264",
                "-c:a",
                "aac",
                "-pix_fmt",
                "yuv420p",
                "-shortest",
            ])
            .arg(output.as_os_str())
            .output()
            .await
            .map_err(|e| format!("Failed to run ffmpeg: {}", e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(format!("ffmpeg encode failed: {}", stderr.trim()));
        }

        // ffmpeg can exit 0 and still leave nothing usable behind when
        // an input stream was empty.
        let size = tokio::fs::metadata(output)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if size == 0 {
            return Err("ffmpeg produced an empty output file".to_string());
        }

        tracing::info!(
            output = %output.display(),
            output_size_bytes = size,
            "Slideshow video encoded"
        );

        Ok(())
    }
}
