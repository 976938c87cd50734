use notecast_backend::infrastructure::config::{Config, LogFormat};
use notecast_backend::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; missing provider credentials fail here
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Notecast Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // Shared HTTP client for all provider calls
    let http_client = reqwest::Client::new();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider repositories (inject client + credentials)
    tracing::info!("Instantiating provider repositories...");
    let tts_repo = Arc::new(
        notecast_backend::infrastructure::repositories::ElevenLabsTtsRepository::new(
            http_client.clone(),
            config.elevenlabs_api_key.clone(),
        ),
    );
    let image_repo = Arc::new(
        notecast_backend::infrastructure::repositories::HuggingFaceImageRepository::new(
            http_client.clone(),
            config.hf_api_token.clone(),
        ),
    );
    let storage_repo = Arc::new(
        notecast_backend::infrastructure::repositories::SupabaseStorageRepository::new(
            http_client.clone(),
            config.supabase_url.clone(),
            config.supabase_service_key.clone(),
            config.storage_bucket.clone(),
        ),
    );

    // 2. Instantiate media toolchain wrappers (inject binary paths)
    let prober = Arc::new(notecast_backend::infrastructure::media::FfprobeProber::new(
        config.ffprobe_path.clone(),
    ));
    let encoder = Arc::new(notecast_backend::infrastructure::media::FfmpegEncoder::new(
        config.ffmpeg_path.clone(),
    ));

    // 3. Instantiate the pipeline service (inject repositories + media)
    tracing::info!("Instantiating scene pipeline...");
    let pipeline = Arc::new(notecast_backend::domain::pipeline::ScenePipeline::new(
        tts_repo,
        image_repo,
        prober,
        encoder,
    ));

    // 4. Instantiate controllers (inject services)
    let video_controller = Arc::new(notecast_backend::controllers::video::VideoController::new(
        pipeline,
        storage_repo,
    ));

    // Start HTTP server with all routes
    start_http_server(config, video_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "notecast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "notecast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
