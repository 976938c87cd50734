use async_trait::async_trait;
use notecast_backend::infrastructure::media::{Encoder, Prober};
use notecast_backend::infrastructure::repositories::{
    ImageRepository, StorageRepository, TtsError, TtsRepository,
};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Counting TTS double, optionally failing every call.
pub struct MockTtsRepository {
    calls: AtomicUsize,
    fail: bool,
}

impl MockTtsRepository {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsRepository for MockTtsRepository {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(TtsError::Call("tts provider unavailable".to_string()))
        } else {
            // Minimal MP3-ish bytes; content is irrelevant to the fakes
            Ok(vec![0xFF, 0xFB, 0x90, 0x00])
        }
    }
}

/// Counting image double.
pub struct MockImageRepository {
    calls: AtomicUsize,
}

impl MockImageRepository {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageRepository for MockImageRepository {
    async fn synthesize(&self, _text: &str, _subject: &str) -> Result<Vec<u8>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

/// Storage double that records uploads and answers with a stable
/// public URL, overwriting on repeated keys like the real backend.
pub struct MockStorageRepository {
    uploads: Mutex<Vec<(String, usize)>>,
}

impl MockStorageRepository {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploads(&self) -> Vec<(String, usize)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageRepository for MockStorageRepository {
    async fn publish(&self, key: &str, bytes: Vec<u8>) -> Result<String, String> {
        self.uploads
            .lock()
            .unwrap()
            .push((key.to_string(), bytes.len()));
        Ok(format!(
            "https://storage.test/storage/v1/object/public/videos/{}",
            key
        ))
    }
}

/// Prober double with a fixed duration.
pub struct FixedProber {
    pub duration: f64,
}

#[async_trait]
impl Prober for FixedProber {
    async fn probe_duration(&self, _path: &Path) -> Result<f64, String> {
        Ok(self.duration)
    }
}

/// Encoder double that writes canned video bytes.
pub struct FakeEncoder;

#[async_trait]
impl Encoder for FakeEncoder {
    async fn encode_slideshow(
        &self,
        _image_list: &Path,
        _audio_list: &Path,
        output: &Path,
    ) -> Result<(), String> {
        std::fs::write(output, b"FAKE-MP4").map_err(|e| e.to_string())
    }
}
