use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the account service
///
/// Every call requires an authenticated user and fails with
/// [`AppError::Precondition`] otherwise.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the balance of the customer's account
    async fn check_balance(&self) -> Result<ApiResponse, AppError>;

    /// Gets the income/expense analysis grouped by month
    ///
    /// # Arguments
    /// * `from_date` - Start date forwarded as is (e.g. "2024-01-31"),
    ///   `1970-01-01` when `None`
    async fn check_expenditure(&self, from_date: Option<&str>) -> Result<ApiResponse, AppError>;

    /// Lists the customer's accounts
    async fn get_accounts(&self) -> Result<ApiResponse, AppError>;
}
