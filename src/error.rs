/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// The remote API rejected the login, or did not hand out a session token
    Authentication(String),
    /// A value passed to the client is missing or malformed
    InvalidArgument(String),
    /// The call needs an authenticated session that is not established yet
    Precondition(String),
    /// The operation is declared but not available
    NotImplemented(String),
    /// Transport failure (connection, timeout, TLS, body read)
    Network(reqwest::Error),
    /// The remote API answered with HTTP 401
    Unauthorized,
    /// The remote API answered with any other non-success status
    Unexpected(StatusCode),
    /// JSON conversion failure
    Json(serde_json::Error),
    /// The response could not be turned into the requested shape
    Deserialization(String),
}

impl AppError {
    /// Shortcut for the error returned by every data call made before login
    #[must_use]
    pub fn not_authenticated() -> Self {
        AppError::Precondition("not authenticated".to_string())
    }

    /// Whether the error was produced by the transport or the remote HTTP layer
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Unauthorized | AppError::Unexpected(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            AppError::Precondition(msg) => write!(f, "precondition failed: {msg}"),
            AppError::NotImplemented(msg) => write!(f, "not implemented: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
