use axum::response::Json;
use color_engine::{format_hex, parse_hex, simulate, DeficiencyType, EngineError, Rgb};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Request body for color-vision deficiency simulation
#[derive(Debug, Deserialize, ToSchema)]
pub struct SimulateRequest {
    /// Color to simulate, `#RRGGBB`
    pub color: String,
    /// One of protanopia, deuteranopia, tritanopia, achromatopsia.
    /// All four are returned when omitted.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// How one color appears under one deficiency
#[derive(Debug, Serialize, ToSchema)]
pub struct Simulation {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "protanopia")]
    pub kind: DeficiencyType,
    pub hex: String,
    #[schema(value_type = Object)]
    pub rgb: Rgb,
}

/// Simulation results for one color
#[derive(Debug, Serialize, ToSchema)]
pub struct SimulateResponse {
    pub original: String,
    pub simulations: Vec<Simulation>,
}

/// Simulate one or all deficiencies. Shared by the HTTP handler and JSON-RPC.
pub fn simulate_report(request: SimulateRequest) -> Result<SimulateResponse, EngineError> {
    let rgb = parse_hex(&request.color)?;
    let kinds = match request.kind.as_deref() {
        Some(tag) => vec![tag.parse::<DeficiencyType>()?],
        None => DeficiencyType::ALL.to_vec(),
    };

    let simulations = kinds
        .into_iter()
        .map(|kind| {
            let simulated = simulate(rgb, kind);
            Simulation {
                kind,
                hex: format_hex(simulated),
                rgb: simulated,
            }
        })
        .collect();

    Ok(SimulateResponse {
        original: format_hex(rgb),
        simulations,
    })
}

/// Simulate how a color appears with color-vision deficiencies
#[utoipa::path(
    post,
    path = "/api/simulate",
    request_body = SimulateRequest,
    responses(
        (status = 200, description = "Simulation computed", body = SimulateResponse),
        (status = 400, description = "Malformed color or unsupported deficiency type", body = super::ErrorResponse),
    ),
    tag = "Simulation"
)]
pub async fn handle_simulate(
    Json(request): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    Ok(Json(simulate_report(request)?))
}
