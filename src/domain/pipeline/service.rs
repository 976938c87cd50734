use super::error::PipelineError;
use super::scene::{split_scenes, SceneAsset};
use crate::infrastructure::media::{Encoder, Prober};
use crate::infrastructure::repositories::{ImageRepository, TtsError, TtsRepository};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Scene pipeline orchestrator.
///
/// Splits a note into sentence scenes and drives the fixed per-scene
/// fan-out (speech -> illustration -> duration probe) strictly in
/// order, then assembles one video from the accumulated assets. All
/// intermediate files live in a request-scoped temporary directory
/// that is removed on every exit path.
pub struct ScenePipeline {
    tts_repo: Arc<dyn TtsRepository>,
    image_repo: Arc<dyn ImageRepository>,
    prober: Arc<dyn Prober>,
    encoder: Arc<dyn Encoder>,
    work_root: Option<PathBuf>,
}

impl ScenePipeline {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        image_repo: Arc<dyn ImageRepository>,
        prober: Arc<dyn Prober>,
        encoder: Arc<dyn Encoder>,
    ) -> Self {
        Self {
            tts_repo,
            image_repo,
            prober,
            encoder,
            work_root: None,
        }
    }

    /// Root the per-request temp directories under `root` instead of
    /// the system temp dir. Used by tests to observe cleanup.
    pub fn with_work_root(mut self, root: PathBuf) -> Self {
        self.work_root = Some(root);
        self
    }

    fn create_temp_dir(&self) -> Result<tempfile::TempDir, std::io::Error> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("notecast-");
        match &self.work_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
    }

    async fn build_scene_assets(
        &self,
        scenes: &[String],
        subject: &str,
        dir: &Path,
    ) -> Result<Vec<SceneAsset>, PipelineError> {
        let mut assets = Vec::with_capacity(scenes.len());

        // Strictly sequential: the manifests need a stable scene order
        // and no attempt is made to parallelize the provider calls.
        for (i, scene) in scenes.iter().enumerate() {
            tracing::info!(
                scene_index = i,
                scene_length = scene.len(),
                "Processing scene"
            );

            let audio = self.tts_repo.synthesize(scene).await.map_err(|e| match e {
                TtsError::Auth(msg) => PipelineError::TtsAuth(msg),
                TtsError::Call(msg) => PipelineError::TtsCall(msg),
            })?;
            let audio_path = dir.join(format!("scene_{}.mp3", i));
            tokio::fs::write(&audio_path, &audio).await?;

            let image = self
                .image_repo
                .synthesize(scene, subject)
                .await
                .map_err(PipelineError::ImageCall)?;
            let image_path = dir.join(format!("scene_{}.png", i));
            tokio::fs::write(&image_path, &image).await?;

            let duration = self
                .prober
                .probe_duration(&audio_path)
                .await
                .map_err(PipelineError::Probe)?;
            // A zero or unknown duration would produce an unusable
            // manifest entry; fail the run instead of letting the
            // encoder limp along.
            if duration <= 0.0 {
                return Err(PipelineError::Probe(format!(
                    "scene {}: audio has zero or unknown duration",
                    i
                )));
            }

            tracing::info!(
                scene_index = i,
                audio_size = audio.len(),
                image_size = image.len(),
                duration_secs = duration,
                "Scene assets ready"
            );

            assets.push(SceneAsset {
                audio_path,
                image_path,
                duration,
            });
        }

        Ok(assets)
    }

    /// Write the two concat-demuxer manifests, in scene order.
    async fn write_manifests(
        &self,
        assets: &[SceneAsset],
        dir: &Path,
    ) -> Result<(PathBuf, PathBuf), PipelineError> {
        let mut image_list = String::new();
        let mut audio_list = String::new();

        for asset in assets {
            image_list.push_str(&format!(
                "file '{}'\nduration {}\n",
                asset.image_path.display(),
                asset.duration
            ));
            audio_list.push_str(&format!("file '{}'\n", asset.audio_path.display()));
        }

        let image_list_path = dir.join("images.txt");
        let audio_list_path = dir.join("audio.txt");
        tokio::fs::write(&image_list_path, image_list).await?;
        tokio::fs::write(&audio_list_path, audio_list).await?;

        Ok((image_list_path, audio_list_path))
    }
}

#[async_trait]
pub trait ScenePipelineApi: Send + Sync {
    /// Build a narrated slideshow video from a note.
    ///
    /// Any step failure aborts the entire run; there is no partial
    /// output. Returns the encoded video bytes.
    async fn run(&self, note_text: &str, subject: &str) -> Result<Vec<u8>, PipelineError>;
}

#[async_trait]
impl ScenePipelineApi for ScenePipeline {
    async fn run(&self, note_text: &str, subject: &str) -> Result<Vec<u8>, PipelineError> {
        // Split first: input with no sentence boundary fails before any
        // temp directory or network work happens.
        let scenes = split_scenes(note_text);
        if scenes.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        tracing::info!(
            scene_count = scenes.len(),
            subject = %subject,
            note_length = note_text.len(),
            "Starting scene pipeline"
        );

        // Dropping the TempDir removes it recursively, so cleanup is
        // guaranteed on both the success and every failure path below.
        let temp_dir = self.create_temp_dir()?;
        let dir = temp_dir.path();

        let assets = self.build_scene_assets(&scenes, subject, dir).await?;
        let (image_list, audio_list) = self.write_manifests(&assets, dir).await?;

        let output_path = dir.join("output.mp4");
        self.encoder
            .encode_slideshow(&image_list, &audio_list, &output_path)
            .await
            .map_err(PipelineError::Encoding)?;

        let video = tokio::fs::read(&output_path).await?;

        tracing::info!(
            scene_count = assets.len(),
            video_size_bytes = video.len(),
            "Scene pipeline completed"
        );

        Ok(video)
    }
}
