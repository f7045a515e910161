/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::{Config, RestApiConfig};
use crate::application::interfaces::{AccountService, AuthService, TransferService};
use crate::constants::{
    DEFAULT_EXPENDITURE_FROM_DATE, DEFAULT_TRANSFER_PURPOSE, EXPENDITURE_FROM_DATE_PARAM, paths,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{CustomerRequest, MsisdnRequest, TransferRequest};
use crate::model::auth::AuthenticatedUser;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the Loop API
///
/// One method per remote endpoint, each sending exactly one request. Data
/// calls need an authenticated user, set by [`AuthService::login`] or
/// [`AuthService::set_user`]; once a token is known it is attached to every
/// request.
///
/// The session lives behind a lock, so a client can be shared between tasks.
/// A login racing other calls may let those calls go out with the previous
/// token.
pub struct Client {
    auth: Arc<Auth>,
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates an unauthenticated client
    ///
    /// # Arguments
    /// * `base_url` - API root, the production endpoint when `None`
    pub fn new(base_url: Option<&str>) -> Result<Self, AppError> {
        let config = match base_url {
            Some(url) => Config::with_base_url(url),
            None => Config {
                rest_api: RestApiConfig::default(),
            },
        };
        Self::with_config(config)
    }

    /// Creates an unauthenticated client from a full configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone())?);
        let auth = Arc::new(Auth::new(http_client.clone()));

        debug!("Client created for {}", config.rest_api.base_url);

        Ok(Self { auth, http_client })
    }

    /// Configuration of this client
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &str {
        &self.config().rest_api.base_url
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets a snapshot of the current session
    pub async fn get_session(&self) -> Session {
        self.auth.get_session().await
    }

    /// Token currently attached to requests
    pub async fn auth_token(&self) -> Option<String> {
        self.auth.get_session().await.auth_token
    }

    /// Customer record currently in use
    pub async fn user(&self) -> Option<AuthenticatedUser> {
        self.auth.get_session().await.user
    }

    /// Whether data calls are allowed
    pub async fn is_authenticated(&self) -> bool {
        self.auth.get_session().await.is_authenticated()
    }

    /// Expenditure analysis starting at a calendar date
    pub async fn check_expenditure_since(&self, from: NaiveDate) -> Result<ApiResponse, AppError> {
        let from = from.format("%Y-%m-%d").to_string();
        self.check_expenditure(Some(&from)).await
    }

    async fn authorized_get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, AppError> {
        let (token, _) = self.auth.require_user().await?;
        self.http_client.get(path, token.as_deref(), query).await
    }

    async fn authorized_post_msisdn(
        &self,
        path: &str,
        msisdn: &str,
    ) -> Result<ApiResponse, AppError> {
        let (token, user) = self.auth.require_user().await?;
        let body = MsisdnRequest {
            customer_id: user.customer_id().clone(),
            msisdn: msisdn.to_string(),
        };
        self.http_client.post(path, token.as_deref(), &body).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None).expect("Failed to create HTTP client")
    }
}

#[async_trait]
impl AuthService for Client {
    async fn login(&self, username: &str, password: &str) -> Result<ApiResponse, AppError> {
        info!("Logging in");
        self.auth.login(username, password).await
    }

    async fn set_auth_code(&self, token: &str) -> Result<&Self, AppError> {
        self.auth.set_auth_code(token).await?;
        Ok(self)
    }

    async fn set_user(&self, user: Value) -> Result<&Self, AppError> {
        self.auth.set_user(user).await?;
        Ok(self)
    }

    async fn logout(&self) {
        self.auth.logout().await;
    }
}

#[async_trait]
impl AccountService for Client {
    async fn check_balance(&self) -> Result<ApiResponse, AppError> {
        info!("Checking account balance");
        let (token, user) = self.auth.require_user().await?;
        let body = CustomerRequest {
            customer_id: user.customer_id().clone(),
        };
        self.http_client
            .post(paths::ACCOUNT_BALANCE, token.as_deref(), &body)
            .await
    }

    async fn check_expenditure(&self, from_date: Option<&str>) -> Result<ApiResponse, AppError> {
        let from_date = from_date.unwrap_or(DEFAULT_EXPENDITURE_FROM_DATE);
        info!("Getting expenditure analysis from {}", from_date);
        self.authorized_get(paths::EXPENDITURE, &[(EXPENDITURE_FROM_DATE_PARAM, from_date)])
            .await
    }

    async fn get_accounts(&self) -> Result<ApiResponse, AppError> {
        info!("Getting accounts");
        self.authorized_get(paths::ACCOUNTS, &[]).await
    }
}

#[async_trait]
impl TransferService for Client {
    async fn get_categories(&self) -> Result<ApiResponse, AppError> {
        info!("Getting transfer categories");
        self.authorized_get(paths::CATEGORIES, &[]).await
    }

    async fn get_transfer_types(&self) -> Result<ApiResponse, AppError> {
        info!("Getting transfer types");
        self.authorized_get(paths::TRANSFER_TYPES, &[]).await
    }

    async fn get_bank_branches(&self) -> Result<ApiResponse, AppError> {
        info!("Getting banks and branches");
        self.authorized_get(paths::BANK_BRANCHES, &[]).await
    }

    async fn get_msisdn_pesalinks(&self, msisdn: &str) -> Result<ApiResponse, AppError> {
        info!("Getting PesaLink channels");
        debug!("PesaLink lookup for {}", msisdn);
        self.authorized_post_msisdn(paths::PESALINK_BANK_LIST, msisdn)
            .await
    }

    async fn check_if_loop_number(&self, msisdn: &str) -> Result<ApiResponse, AppError> {
        info!("Checking Loop number");
        debug!("Loop number check for {}", msisdn);
        self.authorized_post_msisdn(paths::VALIDATE_LOOP_NUMBER, msisdn)
            .await
    }

    async fn send_to_mobile_money(
        &self,
        msisdn: &str,
        amount: f64,
        purpose: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        info!("Sending mobile money transfer");
        debug!("Mobile money transfer of {} to {}", amount, msisdn);
        let (token, user) = self.auth.require_user().await?;
        let body = TransferRequest::mobile_money(
            user.customer_id().clone(),
            msisdn,
            amount,
            purpose.unwrap_or(DEFAULT_TRANSFER_PURPOSE),
        );
        debug!("Transfer request: {}", body);
        self.http_client
            .post(paths::TRANSFER_TO_MOBILE, token.as_deref(), &body)
            .await
    }

    async fn send_via_pesalink(
        &self,
        msisdn: &str,
        amount: f64,
        sort_code: &str,
        purpose: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        info!("Sending PesaLink transfer");
        debug!("PesaLink transfer of {} via {} to {}", amount, sort_code, msisdn);
        let (token, user) = self.auth.require_user().await?;
        let body = TransferRequest::pesalink(
            user.customer_id().clone(),
            msisdn,
            amount,
            sort_code,
            purpose.unwrap_or(DEFAULT_TRANSFER_PURPOSE),
        );
        debug!("Transfer request: {}", body);
        self.http_client
            .post(paths::TRANSFER_TO_MOBILE, token.as_deref(), &body)
            .await
    }

    async fn send_to_bank_via_rtgs(&self) -> Result<ApiResponse, AppError> {
        warn!("RTGS transfers are not available");
        Err(AppError::NotImplemented("send_to_bank_via_rtgs".to_string()))
    }

    async fn send_to_bank_via_eft(&self) -> Result<ApiResponse, AppError> {
        warn!("EFT transfers are not available");
        Err(AppError::NotImplemented("send_to_bank_via_eft".to_string()))
    }
}
