use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // Shared secret the worker caller must present as a bearer token
    pub worker_secret_key: String,
    // Provider credentials
    pub elevenlabs_api_key: String,
    pub hf_api_token: String,
    // Object storage
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub storage_bucket: String,
    // Media toolchain binaries
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            worker_secret_key: env::var("WORKER_SECRET_KEY")?,
            // Missing TTS or image credentials is startup-fatal
            elevenlabs_api_key: env::var("ELEVENLABS_API_KEY")?,
            hf_api_token: env::var("HF_API_TOKEN")?,
            supabase_url: env::var("SUPABASE_URL")?,
            supabase_service_key: env::var("SUPABASE_SERVICE_KEY")?,
            storage_bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| "videos".to_string()),
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
