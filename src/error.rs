use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Image error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Page larger than {max} bytes")]
    TooLarge { max: usize },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Empty image body")]
    Empty,

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Image dimensions too large: {width}x{height} (max {max_pixels} pixels)")]
    Dimensions {
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    #[error("PNG decode error: {0}")]
    Png(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

impl ApiError {
    /// Machine-readable error code included in JSON error bodies
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Engine(e) => e.code(),
            ApiError::Fetch(FetchError::InvalidUrl(_)) => "invalid_url",
            ApiError::Fetch(FetchError::TooLarge { .. }) => "page_too_large",
            ApiError::Fetch(_) => "fetch_failed",
            ApiError::Decode(DecodeError::TooLarge { .. } | DecodeError::Dimensions { .. }) => {
                "image_too_large"
            }
            ApiError::Decode(_) => "invalid_image",
            ApiError::NotFound => "not_found",
            ApiError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(FetchError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ApiError::Decode(DecodeError::TooLarge { .. } | DecodeError::Dimensions { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, code = self.code(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "code": self.code(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
