use axum::response::Json;
use color_engine::{
    contrast_ratio_rgb, format_hex, parse_hex, suggest_accessible_rgb, EngineError, WcagLevel,
    DEFAULT_BACKGROUND, DEFAULT_TARGET_RATIO, WCAG_AA, WCAG_AAA,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::round2;
use crate::error::ApiError;

/// Request body for a contrast check
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContrastRequest {
    /// Foreground (text) color, `#RRGGBB`
    pub foreground: String,
    /// Background color, `#RRGGBB`
    pub background: String,
}

/// Contrast between two colors with WCAG compliance
#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastResponse {
    pub foreground: String,
    pub background: String,
    /// Contrast ratio, 1 to 21, rounded to 2 decimals
    pub ratio: f64,
    /// Highest level met: "AAA", "AA" or "FAIL"
    #[schema(value_type = String, example = "AA")]
    pub level: WcagLevel,
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

/// Request body for an accessible color suggestion
#[derive(Debug, Deserialize, ToSchema)]
pub struct SuggestRequest {
    /// Color to correct, `#RRGGBB`
    pub color: String,
    /// Ratio to reach (default 7.0)
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,
    /// Background to measure against (default `#FFFFFF`)
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_target_ratio() -> f64 {
    DEFAULT_TARGET_RATIO
}

pub(crate) fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

/// Suggested replacement color
#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestResponse {
    pub original: String,
    pub suggested: String,
    pub background: String,
    pub target_ratio: f64,
    pub original_ratio: f64,
    pub suggested_ratio: f64,
    /// Whether the suggestion meets the target; the search only darkens, so
    /// dark-on-light and light-on-dark failures can come back unchanged
    pub reached: bool,
}

/// Measure two colors. Shared by the HTTP handler and JSON-RPC.
pub fn contrast_report(request: ContrastRequest) -> Result<ContrastResponse, EngineError> {
    let foreground = parse_hex(&request.foreground)?;
    let background = parse_hex(&request.background)?;
    let ratio = contrast_ratio_rgb(foreground, background);

    Ok(ContrastResponse {
        foreground: format_hex(foreground),
        background: format_hex(background),
        ratio: round2(ratio),
        level: WcagLevel::for_ratio(ratio),
        passes_aa: ratio >= WCAG_AA,
        passes_aaa: ratio >= WCAG_AAA,
    })
}

/// Run the correction search. Shared by the HTTP handler and JSON-RPC.
pub fn suggest_report(request: SuggestRequest) -> Result<SuggestResponse, EngineError> {
    let original = parse_hex(&request.color)?;
    let background = parse_hex(&request.background)?;
    let suggested = suggest_accessible_rgb(original, request.target_ratio, background);
    let suggested_ratio = contrast_ratio_rgb(suggested, background);

    Ok(SuggestResponse {
        original: format_hex(original),
        suggested: format_hex(suggested),
        background: format_hex(background),
        target_ratio: request.target_ratio,
        original_ratio: round2(contrast_ratio_rgb(original, background)),
        suggested_ratio: round2(suggested_ratio),
        reached: suggested_ratio >= request.target_ratio,
    })
}

/// Check the contrast between two colors
#[utoipa::path(
    post,
    path = "/api/contrast",
    request_body = ContrastRequest,
    responses(
        (status = 200, description = "Contrast measured", body = ContrastResponse),
        (status = 400, description = "Malformed color", body = super::ErrorResponse),
    ),
    tag = "Contrast"
)]
pub async fn handle_contrast(
    Json(request): Json<ContrastRequest>,
) -> Result<Json<ContrastResponse>, ApiError> {
    let report = contrast_report(request)?;
    tracing::debug!(
        foreground = %report.foreground,
        background = %report.background,
        ratio = report.ratio,
        "Contrast checked"
    );
    Ok(Json(report))
}

/// Suggest an accessible replacement for a color
///
/// Darkens the color in steps of 5 until the target ratio is met against
/// the background. Colors that need brightening are returned unchanged.
#[utoipa::path(
    post,
    path = "/api/suggest",
    request_body = SuggestRequest,
    responses(
        (status = 200, description = "Suggestion computed", body = SuggestResponse),
        (status = 400, description = "Malformed color", body = super::ErrorResponse),
    ),
    tag = "Contrast"
)]
pub async fn handle_suggest(
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let report = suggest_report(request)?;
    if !report.reached {
        tracing::info!(
            color = %report.original,
            background = %report.background,
            target = report.target_ratio,
            "Target ratio not reachable by darkening"
        );
    }
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_report_canonicalizes() {
        let report = contrast_report(ContrastRequest {
            foreground: "000000".to_string(),
            background: "#ffffff".to_string(),
        })
        .unwrap();
        assert_eq!(report.foreground, "#000000");
        assert_eq!(report.background, "#FFFFFF");
        assert_eq!(report.ratio, 21.0);
        assert_eq!(report.level, WcagLevel::AAA);
    }

    #[test]
    fn test_pass_flags_use_unrounded_ratio() {
        let report = contrast_report(ContrastRequest {
            foreground: "#777777".to_string(),
            background: "#FFFFFF".to_string(),
        })
        .unwrap();
        assert_eq!(report.ratio, 4.48);
        assert!(!report.passes_aa);
    }

    #[test]
    fn test_suggest_defaults() {
        let request: SuggestRequest = serde_json::from_str(r##"{"color": "#777777"}"##).unwrap();
        assert_eq!(request.target_ratio, 7.0);
        assert_eq!(request.background, "#FFFFFF");

        let report = suggest_report(request).unwrap();
        assert_eq!(report.suggested, "#595959");
        assert_eq!(report.original_ratio, 4.48);
        assert_eq!(report.suggested_ratio, 7.0);
        assert!(report.reached);
    }

    #[test]
    fn test_suggest_unreachable() {
        let report = suggest_report(SuggestRequest {
            color: "#333333".to_string(),
            target_ratio: 7.0,
            background: "#000000".to_string(),
        })
        .unwrap();
        assert_eq!(report.suggested, "#333333");
        assert!(!report.reached);
    }
}
