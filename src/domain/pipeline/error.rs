use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no sentences found in note text")]
    EmptyInput,
    #[error("speech synthesis rejected: {0}")]
    TtsAuth(String),
    #[error("speech synthesis failed: {0}")]
    TtsCall(String),
    #[error("image synthesis failed: {0}")]
    ImageCall(String),
    #[error("duration probe failed: {0}")]
    Probe(String),
    #[error("video encoding failed: {0}")]
    Encoding(String),
    #[error("pipeline io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            // The gateway collapses every pipeline failure to a 500
            // carrying the underlying error text as details.
            PipelineError::Io(e) => AppError::Internal(e.to_string()),
            other => AppError::ExternalService(other.to_string()),
        }
    }
}
