pub mod error;
pub mod scene;
pub mod service;
pub mod style;

pub use error::PipelineError;
pub use scene::{split_scenes, SceneAsset};
pub use service::{ScenePipeline, ScenePipelineApi};
