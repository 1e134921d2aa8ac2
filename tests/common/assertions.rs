//! Custom assertion helpers for HTTP responses

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert the status code and return the JSON body
pub fn assert_json_status(response: &TestResponse, status: StatusCode) -> serde_json::Value {
    assert_eq!(
        response.status_code(),
        status,
        "Unexpected status, body: {}",
        response.text()
    );
    response.json()
}

/// Assert that a response is the JSON error body for `status`
///
/// Returns the `error` message.
pub fn assert_error_response(response: &TestResponse, status: StatusCode) -> String {
    let body = assert_json_status(response, status);
    assert_eq!(body["status"], status.as_u16());
    body["error"]
        .as_str()
        .unwrap_or_else(|| panic!("Error body without message: {}", body))
        .to_string()
}
