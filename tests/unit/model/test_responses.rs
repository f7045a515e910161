use loop_client::model::responses::ApiResponse;
use loop_client::prelude::AppError;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};

fn response(status: StatusCode, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        headers: HeaderMap::new(),
        body,
    }
}

#[test]
fn return_code_accepts_numbers_and_text() {
    let numeric = response(StatusCode::OK, json!({"returnCode": 3509}));
    assert_eq!(numeric.return_code(), Some(3509));

    let textual = response(StatusCode::OK, json!({"returnCode": " 3509 "}));
    assert_eq!(textual.return_code(), Some(3509));

    let missing = response(StatusCode::OK, json!({"other": 1}));
    assert_eq!(missing.return_code(), None);

    let array = response(StatusCode::OK, json!([1, 2]));
    assert_eq!(array.return_code(), None);
}

#[test]
fn return_message_is_read_from_body() {
    let r = response(StatusCode::OK, json!({"returnMessage": "done"}));
    assert_eq!(r.return_message(), Some("done"));
    assert_eq!(response(StatusCode::OK, Value::Null).return_message(), None);
}

#[test]
fn header_lookup_is_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.insert("auth-token", HeaderValue::from_static("tok"));
    let r = ApiResponse {
        status: StatusCode::OK,
        headers,
        body: Value::Null,
    };
    assert_eq!(r.header("Auth-Token"), Some("tok"));
    assert_eq!(r.header("missing"), None);
}

#[test]
fn error_for_status_maps_http_failures() {
    assert!(response(StatusCode::OK, Value::Null).error_for_status().is_ok());
    assert!(response(StatusCode::CREATED, Value::Null).error_for_status().is_ok());

    let unauthorized = response(StatusCode::UNAUTHORIZED, Value::Null)
        .error_for_status()
        .unwrap_err();
    assert!(matches!(unauthorized, AppError::Unauthorized));

    let unexpected = response(StatusCode::BAD_GATEWAY, json!("bad gateway"))
        .error_for_status()
        .unwrap_err();
    assert!(matches!(unexpected, AppError::Unexpected(status) if status == StatusCode::BAD_GATEWAY));
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Balance {
    available_balance: f64,
}

#[test]
fn json_deserializes_into_caller_types() {
    let r = response(StatusCode::OK, json!({"availableBalance": 12.5, "extra": true}));
    let balance: Balance = r.json().expect("balance");
    assert_eq!(
        balance,
        Balance {
            available_balance: 12.5
        }
    );

    let err = response(StatusCode::OK, json!({})).json::<Balance>().unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn into_body_returns_the_body() {
    let r = response(StatusCode::OK, json!({"a": 1}));
    assert_eq!(r.into_body(), json!({"a": 1}));
}
