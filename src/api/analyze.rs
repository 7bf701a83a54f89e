use axum::{extract::State, response::Json};
use color_engine::{
    analyze_colors, format_hex, parse_hex, summarize, AnalysisSummary, ColorAnalysis, EngineError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::contrast::default_background;
use crate::error::ApiError;
use crate::services::PageFetcher;

/// Request body for batch analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Colors to analyse, `#RRGGBB` each
    pub colors: Vec<String>,
    /// Background to measure against (default `#FFFFFF`)
    #[serde(default = "default_background")]
    pub background: String,
}

/// Batch analysis result
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub background: String,
    #[schema(value_type = Object)]
    pub summary: AnalysisSummary,
    /// One entry per distinct input color, in input order
    #[schema(value_type = Vec<Object>)]
    pub colors: Vec<ColorAnalysis>,
}

/// Request body for website analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebsiteRequest {
    /// Page to fetch (http or https)
    pub url: String,
    /// Background to measure against (default `#FFFFFF`)
    #[serde(default = "default_background")]
    pub background: String,
}

/// Website analysis result
#[derive(Debug, Serialize, ToSchema)]
pub struct WebsiteResponse {
    pub url: String,
    pub background: String,
    #[schema(value_type = Object)]
    pub summary: AnalysisSummary,
    #[schema(value_type = Vec<Object>)]
    pub colors: Vec<ColorAnalysis>,
}

/// Analyse a color list. Shared by the HTTP handlers and JSON-RPC.
pub fn analyze_report(request: AnalyzeRequest) -> Result<AnalyzeResponse, EngineError> {
    let background = format_hex(parse_hex(&request.background)?);
    let colors = analyze_colors(request.colors.as_slice(), &background)?;
    Ok(AnalyzeResponse {
        background,
        summary: summarize(&colors),
        colors,
    })
}

/// Analyse a list of colors
///
/// Measures every color against the background and suggests a darker
/// replacement for each color failing WCAG AAA.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Colors analysed", body = AnalyzeResponse),
        (status = 400, description = "Empty list or malformed color", body = super::ErrorResponse),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let report = analyze_report(request)?;
    tracing::debug!(
        total = report.summary.total,
        failing = report.summary.failing,
        "Colors analysed"
    );
    Ok(Json(report))
}

/// Analyse the colors used by a website
///
/// Fetches the page, extracts hex colors from inline styles, `<style>`
/// elements and color attributes, and analyses them like `/api/analyze`.
#[utoipa::path(
    post,
    path = "/api/website",
    request_body = WebsiteRequest,
    responses(
        (status = 200, description = "Page colors analysed", body = WebsiteResponse),
        (status = 400, description = "Invalid URL or no colors found", body = super::ErrorResponse),
        (status = 502, description = "Page could not be fetched", body = super::ErrorResponse),
    ),
    tag = "Analysis"
)]
pub async fn handle_website(
    State(fetcher): State<Arc<PageFetcher>>,
    Json(request): Json<WebsiteRequest>,
) -> Result<Json<WebsiteResponse>, ApiError> {
    // Validate the background before spending a network round trip
    let background = format_hex(parse_hex(&request.background)?);
    let colors = fetcher.fetch_colors(&request.url).await?;

    let report = analyze_report(AnalyzeRequest { colors, background })?;
    Ok(Json(WebsiteResponse {
        url: request.url,
        background: report.background,
        summary: report.summary,
        colors: report.colors,
    }))
}
