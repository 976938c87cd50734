use std::path::PathBuf;

/// Per-scene asset record, in scene order.
#[derive(Debug, Clone)]
pub struct SceneAsset {
    pub audio_path: PathBuf,
    pub image_path: PathBuf,
    /// Narration duration in seconds, strictly positive for a usable scene.
    pub duration: f64,
}

/// Split note text into sentence-bounded scenes.
///
/// A scene is a maximal run of non-terminator characters followed by
/// one or more sentence terminators (`.`, `!`, `?`), trimmed. Text with
/// no terminator at all yields no scenes.
pub fn split_scenes(text: &str) -> Vec<String> {
    let sentence_pattern = regex::Regex::new(r"[^.!?]+[.!?]+").unwrap();

    sentence_pattern
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
