//! Integration tests for /api/simulate.

mod common;

use axum::http::StatusCode;
use common::fixtures::colors;
use common::{assert_error, assert_hex_list, assert_ok, TestApp};

#[tokio::test]
async fn test_simulate_all_types() {
    let app = TestApp::new();

    let body = serde_json::json!({"color": colors::RED});
    let response = app.post_json("/api/simulate", &body.to_string()).await;

    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["original"], colors::RED);

    let simulations = &json["simulations"];
    let kinds: Vec<&str> = simulations
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        ["protanopia", "deuteranopia", "tritanopia", "achromatopsia"]
    );
    assert_hex_list(simulations, &["#918E00", "#9FB300", "#F20000", "#4C4C4C"]);
}

#[tokio::test]
async fn test_simulate_single_type() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/simulate",
            r##"{"color": "#0000FF", "type": "tritanopia"}"##,
        )
        .await;

    assert_ok(&response);
    let json: serde_json::Value = response.json();
    let simulations = json["simulations"].as_array().unwrap();
    assert_eq!(simulations.len(), 1);
    assert_eq!(simulations[0]["type"], "tritanopia");
    assert_eq!(simulations[0]["hex"], "#0D9186");
    assert_eq!(simulations[0]["rgb"]["g"], 145);
}

#[tokio::test]
async fn test_achromatopsia_is_gray() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/simulate",
            r##"{"color": "#336699", "type": "achromatopsia"}"##,
        )
        .await;

    assert_ok(&response);
    let json: serde_json::Value = response.json();
    let rgb = &json["simulations"][0]["rgb"];
    assert_eq!(rgb["r"], 93);
    assert_eq!(rgb["g"], 93);
    assert_eq!(rgb["b"], 93);
}

#[tokio::test]
async fn test_simulate_rejects_unknown_type() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/simulate",
            r##"{"color": "#FF0000", "type": "monochromacy"}"##,
        )
        .await;

    assert_error(
        &response,
        StatusCode::BAD_REQUEST,
        "unsupported_deficiency_type",
    );
}

#[tokio::test]
async fn test_simulate_type_is_case_sensitive() {
    let app = TestApp::new();

    for kind in ["Protanopia", " achromatopsia ", "TRITANOPIA"] {
        let body = serde_json::json!({"color": colors::RED, "type": kind});
        let response = app.post_json("/api/simulate", &body.to_string()).await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "unsupported_deficiency_type",
        );
    }
}

#[tokio::test]
async fn test_simulate_rejects_malformed_color() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/simulate", r#"{"color": "red"}"#)
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "invalid_color_format");
}
