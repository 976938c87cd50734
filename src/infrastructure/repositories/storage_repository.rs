use async_trait::async_trait;

/// Repository for publishing finished videos to object storage.
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Upload `bytes` under `key`, overwriting any existing object at
    /// that key, and return the object's public URL.
    async fn publish(&self, key: &str, bytes: Vec<u8>) -> Result<String, String>;
}
