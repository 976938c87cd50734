use super::storage_repository::StorageRepository;
use async_trait::async_trait;

/// Supabase Storage implementation of the storage repository.
///
/// Uploads go through the storage REST API with `x-upsert` so a repeat
/// publish of the same key replaces the object instead of failing.
pub struct SupabaseStorageRepository {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseStorageRepository {
    pub fn new(http: reqwest::Client, base_url: String, service_key: String, bucket: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }
}

#[async_trait]
impl StorageRepository for SupabaseStorageRepository {
    async fn publish(&self, key: &str, bytes: Vec<u8>) -> Result<String, String> {
        let size = bytes.len();
        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            "Uploading video to storage"
        );

        let response = self
            .http
            .post(self.object_url(key))
            .bearer_auth(&self.service_key)
            .header("x-upsert", "true")
            .header("content-type", "video/mp4")
            .body(bytes)
            .send()
            .await
            .map_err(|e| format!("Storage upload request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Storage upload failed ({}): {}", status, body));
        }

        let url = self.public_url(key);
        tracing::info!(url = %url, size_bytes = size, "Video published");
        Ok(url)
    }
}
