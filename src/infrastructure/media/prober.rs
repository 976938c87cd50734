use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use super::Prober;

/// ffprobe-backed duration prober.
pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }
}

#[async_trait]
impl Prober for FfprobeProber {
    async fn probe_duration(&self, path: &Path) -> Result<f64, String> {
        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "csv=p=0",
            ])
            .arg(path.as_os_str())
            .output()
            .await
            .map_err(|e| format!("Failed to run ffprobe: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("ffprobe failed: {}", stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        // ffprobe prints "N/A" for containers without a duration; treat
        // that as zero and let the pipeline decide what to do with it.
        let duration = stdout.trim().parse::<f64>().unwrap_or(0.0);

        tracing::debug!(
            path = %path.display(),
            duration_secs = duration,
            "Probed audio duration"
        );

        Ok(duration)
    }
}
