use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::config::Config;

/// Authentication middleware: the caller must present the configured
/// worker secret as a bearer token. Runs before the body is touched.
pub async fn auth_middleware(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    // Check Bearer token format
    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Unauthorized(
            "Invalid authorization format".to_string(),
        ));
    }

    let token = &auth_header[7..]; // Skip "Bearer "

    // Exact match against the static shared secret
    if token != config.worker_secret_key {
        return Err(AppError::Unauthorized("Invalid secret".to_string()));
    }

    Ok(next.run(request).await)
}
