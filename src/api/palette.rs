use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Json,
};
use color_engine::{extract_dominant, DominantColorEntry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::ImageDecoder;

/// Query parameters for palette extraction
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaletteQuery {
    /// Number of colors to return (default from config, 10)
    #[serde(default)]
    pub top: Option<usize>,
}

/// Dominant colors of an uploaded image
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    /// Original image width
    pub width: u32,
    /// Original image height
    pub height: u32,
    /// Side length of the square grid the colors were counted on
    pub analysis_size: u32,
    /// Most frequent colors, most frequent first. `percentage` is relative
    /// to the number of colors requested, not to the pixel count.
    #[schema(value_type = Vec<Object>)]
    pub colors: Vec<DominantColorEntry>,
}

/// Extract the dominant colors of a PNG image
///
/// The image is resampled to the configured analysis grid (100x100 by
/// default) and exact colors are ranked by frequency.
#[utoipa::path(
    post,
    path = "/api/palette",
    request_body(content = Vec<u8>, content_type = "image/png", description = "PNG image bytes"),
    params(PaletteQuery),
    responses(
        (status = 200, description = "Dominant colors extracted", body = PaletteResponse),
        (status = 400, description = "Missing or undecodable image", body = super::ErrorResponse),
        (status = 413, description = "Image exceeds the upload limit", body = super::ErrorResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    State(config): State<Arc<AppConfig>>,
    State(decoder): State<Arc<ImageDecoder>>,
    Query(query): Query<PaletteQuery>,
    body: Bytes,
) -> Result<Json<PaletteResponse>, ApiError> {
    let top_n = query.top.unwrap_or(config.analysis.top_n);

    // Decoding and counting are CPU-bound
    let (response, elapsed) = tokio::task::spawn_blocking(move || {
        let start = std::time::Instant::now();
        let (image, grid) = decoder.decode_for_analysis(&body)?;
        let colors = extract_dominant(&grid, top_n)?;
        let response = PaletteResponse {
            width: image.width,
            height: image.height,
            analysis_size: decoder.analysis_size(),
            colors,
        };
        Ok::<_, ApiError>((response, start.elapsed()))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Palette task failed: {e}")))??;

    tracing::info!(
        width = response.width,
        height = response.height,
        colors = response.colors.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Palette extracted"
    );

    Ok(Json(response))
}
