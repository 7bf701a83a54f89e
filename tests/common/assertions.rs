//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a JSON error body with the given HTTP status and error code
pub fn assert_error(response: &TestResponse, expected: StatusCode, code: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}",
        expected.as_u16(),
        json["status"]
    );
    assert_eq!(
        json["code"], code,
        "Unexpected error code. Full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected an error message");
}

/// Assert the `hex` fields of a color list, in order
pub fn assert_hex_list(colors: &serde_json::Value, expected: &[&str]) {
    let actual: Vec<&str> = colors
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|c| c["hex"].as_str().expect("Expected a hex string"))
        .collect();
    assert_eq!(actual, expected);
}
