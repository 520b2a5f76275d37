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

/// Assert an error response with the JSON `{status, error}` body
pub fn assert_api_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Product ids of a ranked product list, in order
pub fn product_ids(products: &serde_json::Value) -> Vec<u64> {
    products
        .as_array()
        .expect("Expected product array")
        .iter()
        .map(|p| p["id"].as_u64().expect("Expected numeric id"))
        .collect()
}

/// Assert a ranked list is sorted by descending weighted_score
pub fn assert_sorted_by_score(products: &serde_json::Value) {
    let scores: Vec<f64> = products
        .as_array()
        .expect("Expected product array")
        .iter()
        .map(|p| p["weighted_score"].as_f64().expect("Expected weighted_score"))
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "Scores not descending: {scores:?}");
    }
}
