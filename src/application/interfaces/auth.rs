use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for establishing the session
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in and stores the returned token and customer record
    async fn login(&self, username: &str, password: &str) -> Result<ApiResponse, AppError>;

    /// Sets a previously obtained token, for replay without a new login
    async fn set_auth_code(&self, token: &str) -> Result<&Self, AppError>;

    /// Sets a previously obtained customer record, for replay without a new login
    ///
    /// The value must be a JSON object containing `customerId`.
    async fn set_user(&self, user: Value) -> Result<&Self, AppError>;

    /// Clears the local session
    async fn logout(&self);
}
