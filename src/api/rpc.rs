//! JSON-RPC 2.0 dispatch over the engine.
//!
//! A thin shim for clients that prefer a single endpoint. Methods mirror the
//! HTTP routes and take the same bodies as `params`:
//!
//! | Method | Params | Result |
//! |--------|--------|--------|
//! | `contrast` | [`ContrastRequest`](super::ContrastRequest) | [`ContrastResponse`](super::ContrastResponse) |
//! | `suggest` | [`SuggestRequest`](super::SuggestRequest) | [`SuggestResponse`](super::SuggestResponse) |
//! | `analyze` | [`AnalyzeRequest`](super::AnalyzeRequest) | [`AnalyzeResponse`](super::AnalyzeResponse) |
//! | `simulate` | [`SimulateRequest`](super::SimulateRequest) | [`SimulateResponse`](super::SimulateResponse) |
//!
//! Every reply is HTTP 200; failures travel in the JSON-RPC `error` member.
//! A notification (a valid request without an `id` member) is executed but
//! answered with an empty 204.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use color_engine::EngineError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use super::{analyze_report, contrast_report, simulate_report, suggest_report};

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// JSON-RPC request envelope
#[derive(Debug, Deserialize, ToSchema)]
pub struct RpcRequest {
    /// Must be "2.0"
    pub jsonrpc: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: Value,
}

/// JSON-RPC error object
#[derive(Debug, Serialize, ToSchema)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

impl RpcError {
    fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl From<EngineError> for RpcError {
    fn from(e: EngineError) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: e.to_string(),
            data: Some(json!({ "code": e.code() })),
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct RpcResponse {
    #[schema(value_type = String)]
    pub jsonrpc: &'static str,
    #[schema(value_type = Object)]
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    fn reply(id: Value, outcome: Result<Value, RpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0",
            id,
            result,
            error,
        }
    }
}

fn call<P, R>(
    params: Value,
    method: impl FnOnce(P) -> Result<R, EngineError>,
) -> Result<Value, RpcError>
where
    P: DeserializeOwned,
    R: Serialize,
{
    let params: P = serde_json::from_value(params)
        .map_err(|e| RpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;
    let result = method(params)?;
    serde_json::to_value(result).map_err(|e| RpcError::new(INTERNAL_ERROR, e.to_string()))
}

/// Route a method name to its engine call.
pub fn dispatch(method: &str, params: Value) -> Result<Value, RpcError> {
    match method {
        "contrast" => call(params, contrast_report),
        "suggest" => call(params, suggest_report),
        "analyze" => call(params, analyze_report),
        "simulate" => call(params, simulate_report),
        _ => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )),
    }
}

/// Handle one raw JSON-RPC request body.
///
/// Returns `None` for notifications, which get no reply.
pub fn handle_rpc_body(body: &[u8]) -> Option<RpcResponse> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            return Some(RpcResponse::reply(
                Value::Null,
                Err(RpcError::new(PARSE_ERROR, format!("Parse error: {e}"))),
            ))
        }
    };

    let is_notification = value.is_object() && value.get("id").is_none();
    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let request: RpcRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            return Some(RpcResponse::reply(
                id,
                Err(RpcError::new(INVALID_REQUEST, format!("Invalid request: {e}"))),
            ))
        }
    };

    if request.jsonrpc != "2.0" {
        return Some(RpcResponse::reply(
            request.id,
            Err(RpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\"")),
        ));
    }

    tracing::debug!(method = %request.method, "JSON-RPC call");
    let outcome = dispatch(&request.method, request.params);
    if let Err(error) = &outcome {
        tracing::debug!(
            method = %request.method,
            code = error.code,
            error = %error.message,
            "JSON-RPC call failed"
        );
    }
    if is_notification {
        return None;
    }
    Some(RpcResponse::reply(request.id, outcome))
}

/// JSON-RPC 2.0 endpoint
///
/// Methods: `contrast`, `suggest`, `analyze`, `simulate`. Params match the
/// request bodies of the corresponding `/api/*` routes.
#[utoipa::path(
    post,
    path = "/rpc",
    request_body = RpcRequest,
    responses(
        (status = 200, description = "JSON-RPC response (success or error)", body = RpcResponse),
        (status = 204, description = "Notification accepted, no reply"),
    ),
    tag = "JSON-RPC"
)]
pub async fn handle_rpc(body: Bytes) -> Response {
    match handle_rpc_body(&body) {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
