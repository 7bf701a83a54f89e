pub mod analyze;
pub mod contrast;
pub mod palette;
pub mod rpc;
pub mod simulate;

use serde::Serialize;
use utoipa::ToSchema;

pub use analyze::{__path_handle_analyze, __path_handle_website};
pub use analyze::{
    analyze_report, handle_analyze, handle_website, AnalyzeRequest, AnalyzeResponse,
    WebsiteRequest, WebsiteResponse,
};
pub use contrast::{__path_handle_contrast, __path_handle_suggest};
pub use contrast::{
    contrast_report, handle_contrast, handle_suggest, suggest_report, ContrastRequest,
    ContrastResponse, SuggestRequest, SuggestResponse,
};
pub use palette::{handle_palette, PaletteQuery, PaletteResponse, __path_handle_palette};
pub use rpc::{handle_rpc, RpcError, RpcRequest, RpcResponse, __path_handle_rpc};
pub use simulate::{
    handle_simulate, simulate_report, SimulateRequest, SimulateResponse, Simulation,
    __path_handle_simulate,
};

/// Error body returned by every `/api/*` route
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Machine-readable error code (e.g. `invalid_color_format`)
    pub code: String,
    /// Human-readable message
    pub error: String,
}

/// Round a ratio for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
