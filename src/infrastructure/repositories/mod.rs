pub mod elevenlabs_tts_repository;
pub mod huggingface_image_repository;
pub mod image_repository;
pub mod storage_repository;
pub mod supabase_storage_repository;
pub mod tts_repository;

pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use huggingface_image_repository::{HuggingFaceImageRepository, RetryPolicy};
pub use image_repository::ImageRepository;
pub use storage_repository::StorageRepository;
pub use supabase_storage_repository::SupabaseStorageRepository;
pub use tts_repository::{TtsError, TtsRepository};
