use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for transfer lookups and transfers
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Lists the transaction categories used to classify transfers
    async fn get_categories(&self) -> Result<ApiResponse, AppError>;

    /// Lists the supported transfer methods
    async fn get_transfer_types(&self) -> Result<ApiResponse, AppError>;

    /// Lists banks and their branches
    async fn get_bank_branches(&self) -> Result<ApiResponse, AppError>;

    /// Lists the PesaLink channels reachable for a phone number
    ///
    /// The sort codes in the result feed [`TransferService::send_via_pesalink`].
    async fn get_msisdn_pesalinks(&self, msisdn: &str) -> Result<ApiResponse, AppError>;

    /// Checks whether a phone number is on the Loop network
    ///
    /// Transfers within the network carry no fee. The answer is in the
    /// returnCode of the response.
    async fn check_if_loop_number(&self, msisdn: &str) -> Result<ApiResponse, AppError>;

    /// Sends money to a mobile money wallet
    ///
    /// # Arguments
    /// * `msisdn` - Destination phone number
    /// * `amount` - Amount to send
    /// * `purpose` - Free text, "Cash Transfer" when `None`
    async fn send_to_mobile_money(
        &self,
        msisdn: &str,
        amount: f64,
        purpose: Option<&str>,
    ) -> Result<ApiResponse, AppError>;

    /// Sends money over PesaLink
    ///
    /// # Arguments
    /// * `msisdn` - Destination phone number
    /// * `amount` - Amount to send
    /// * `sort_code` - Destination bank, from [`TransferService::get_msisdn_pesalinks`]
    /// * `purpose` - Free text, "Cash Transfer" when `None`
    async fn send_via_pesalink(
        &self,
        msisdn: &str,
        amount: f64,
        sort_code: &str,
        purpose: Option<&str>,
    ) -> Result<ApiResponse, AppError>;

    /// Bank transfer over RTGS. Not available.
    async fn send_to_bank_via_rtgs(&self) -> Result<ApiResponse, AppError>;

    /// Bank transfer over EFT. Not available.
    async fn send_to_bank_via_eft(&self) -> Result<ApiResponse, AppError>;
}
