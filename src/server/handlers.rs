// HTTP request handlers

use super::routes::AppState;
use crate::error::RelayError;
use crate::provider::{build_payload, resolve, ModelChoice};
use crate::upstream::extract_result;
use crate::vision::to_webp_base64;
use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde_json::json;
use tracing::{debug, info, warn};

/// Landing page for manual use of the relay.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Health check: confirms the process is up and routing works.
pub async fn test_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "API service is running" }))
}

/// Handler for the /analyze_camera endpoint.
///
/// Accepts one multipart submission with two image files (`camera_image`,
/// `map_image`), a `prompt` text field, and an optional `model` selector.
/// Both images are normalized to base64 WebP and forwarded with the prompt
/// to the selected vision-language provider; the provider's answer is
/// relayed back as `{success, result, raw}`.
pub async fn analyze_camera_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, RelayError> {
    let mut camera_image: Option<Bytes> = None;
    let mut map_image: Option<Bytes> = None;
    let mut prompt = String::new();
    let mut model = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| RelayError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "camera_image" => {
                camera_image = Some(field.bytes().await.map_err(|e| {
                    RelayError::Validation(format!("Failed to read camera_image: {}", e))
                })?);
            }
            "map_image" => {
                map_image = Some(field.bytes().await.map_err(|e| {
                    RelayError::Validation(format!("Failed to read map_image: {}", e))
                })?);
            }
            "prompt" => {
                prompt = field.text().await.map_err(|e| {
                    RelayError::Validation(format!("Failed to read prompt: {}", e))
                })?;
            }
            "model" => {
                model = field.text().await.map_err(|e| {
                    RelayError::Validation(format!("Failed to read model: {}", e))
                })?;
            }
            other => {
                debug!("Ignoring unknown multipart field: {}", other);
            }
        }
    }

    let prompt = prompt.trim();
    let (camera_image, map_image) = match (camera_image, map_image) {
        (Some(camera), Some(map)) if !prompt.is_empty() => (camera, map),
        _ => {
            warn!("Rejecting analyze request with missing image or empty prompt");
            return Err(RelayError::Validation("Missing input".to_string()));
        }
    };

    let choice = ModelChoice::parse(&model);
    info!(
        "Analyze request: model={:?}, camera={} bytes, map={} bytes, prompt={}",
        choice,
        camera_image.len(),
        map_image.len(),
        crate::utils::truncate(prompt, 100)
    );

    // Normalize both uploads to the canonical WebP encoding.
    let camera_b64 = to_webp_base64(&camera_image)?;
    let map_b64 = to_webp_base64(&map_image)?;
    debug!("Normalized both images to base64 WebP");

    // Resolve the provider; fails before any network call if the credential
    // is missing.
    let provider = resolve(choice, &state.config.providers)?;
    let payload = build_payload(&provider, &map_b64, &camera_b64, prompt);

    let raw = state.upstream.send_chat(&provider, &payload).await?;
    let result = extract_result(&raw);

    Ok(Json(json!({ "success": true, "result": result, "raw": raw })).into_response())
}
