use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::{
    domain::pipeline::ScenePipelineApi,
    error::{AppError, AppResult},
    infrastructure::repositories::StorageRepository,
};

/// Request for POST /generate-video
///
/// Fields are optional at the serde level so a missing field becomes a
/// 400 naming the field instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    pub note_id: Option<NoteId>,
    pub note_text: Option<String>,
    pub subject_name: Option<String>,
}

/// Note identifiers arrive as either a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Number(n) => write!(f, "{}", n),
            NoteId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    pub status: String,
    pub video_url: String,
}

pub struct VideoController {
    pipeline: Arc<dyn ScenePipelineApi>,
    storage: Arc<dyn StorageRepository>,
}

impl VideoController {
    pub fn new(pipeline: Arc<dyn ScenePipelineApi>, storage: Arc<dyn StorageRepository>) -> Self {
        Self { pipeline, storage }
    }

    /// POST /generate-video - build and publish a narrated slideshow
    /// for one note, synchronously within the request.
    pub async fn generate_video(
        State(controller): State<Arc<VideoController>>,
        Json(request): Json<GenerateVideoRequest>,
    ) -> AppResult<Json<GenerateVideoResponse>> {
        // Validate the three required fields before touching any provider
        let note_id = request
            .note_id
            .ok_or_else(|| AppError::BadRequest("noteId is required".to_string()))?;
        let note_text = request
            .note_text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("noteText is required".to_string()))?;
        let subject_name = request
            .subject_name
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("subjectName is required".to_string()))?;

        tracing::info!(
            note_id = %note_id,
            subject = %subject_name,
            note_length = note_text.len(),
            "Video generation request"
        );

        let video = controller.pipeline.run(&note_text, &subject_name).await?;

        let key = format!("note-videos/{}.mp4", note_id);
        let video_url = controller
            .storage
            .publish(&key, video)
            .await
            .map_err(AppError::ExternalService)?;

        tracing::info!(note_id = %note_id, video_url = %video_url, "Video generation complete");

        Ok(Json(GenerateVideoResponse {
            status: "complete".to_string(),
            video_url,
        }))
    }
}
