/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

/// HTTP response forwarded to the caller
///
/// The body is read eagerly and kept as JSON. Nothing is validated: an empty
/// body becomes `null` and a body that is not JSON is kept as a JSON string.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Value,
}

impl ApiResponse {
    /// Reads the full body of a transport response
    pub async fn from_response(response: Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;
        Ok(Self {
            status,
            headers,
            body: parse_body(&text),
        })
    }

    /// Whether the HTTP status is 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turns a non-2xx status into an error, passing successful responses through
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.is_success() {
            return Ok(self);
        }
        match self.status {
            StatusCode::UNAUTHORIZED => {
                error!("Unauthorized: {}", self.body);
                Err(AppError::Unauthorized)
            }
            status => {
                error!("Request failed with status {}: {}", status, self.body);
                Err(AppError::Unexpected(status))
            }
        }
    }

    /// The `returnCode` embedded in the body, numeric or textual
    #[must_use]
    pub fn return_code(&self) -> Option<i64> {
        match self.body.get("returnCode")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The `returnMessage` embedded in the body
    #[must_use]
    pub fn return_message(&self) -> Option<&str> {
        self.body.get("returnMessage").and_then(Value::as_str)
    }

    /// A response header as text
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Deserializes the body into a caller-chosen type
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.body.clone())?)
    }

    /// Consumes the response, keeping only the body
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|e| {
        warn!("Response body is not JSON ({}), keeping it as text", e);
        Value::String(text.to_string())
    })
}
