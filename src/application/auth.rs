/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session handling for the Loop API
//!
//! The API issues a token on login and expects it on every later call, along
//! with the customer identifier taken from the login body. Both can also be
//! injected directly, since the API refuses repeated logins in a short window
//! and callers often replay a cached token instead.

use crate::constants::{AUTH_TOKEN_HEADER, LOGIN_FAILED_RETURN_CODE, paths};
use crate::error::AppError;
use crate::model::auth::AuthenticatedUser;
use crate::model::http::HttpClient;
use crate::model::requests::LoginRequest;
use crate::model::responses::ApiResponse;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Session information for authenticated requests
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Token sent in the `Authorization` header
    pub auth_token: Option<String>,
    /// Customer record from the login body
    pub user: Option<AuthenticatedUser>,
}

impl Session {
    /// Data calls are allowed once a customer is known
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Authentication manager for the Loop API
///
/// Owns the session shared by every request of a client.
pub struct Auth {
    http: Arc<HttpClient>,
    session: Arc<RwLock<Session>>,
}

impl Auth {
    /// Creates an unauthenticated manager on top of the given transport
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            session: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Snapshot of the current session
    pub async fn get_session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Token and customer for a data call, or `Precondition` before login
    pub async fn require_user(&self) -> Result<(Option<String>, AuthenticatedUser), AppError> {
        let session = self.session.read().await;
        match &session.user {
            Some(user) => Ok((session.auth_token.clone(), user.clone())),
            None => {
                warn!("Request attempted without an authenticated user");
                Err(AppError::not_authenticated())
            }
        }
    }

    /// Logs in with user name and password
    ///
    /// On success the `auth-token` response header becomes the session token
    /// and the response body becomes the authenticated user. The session is
    /// only written once both have been read, so a failed login leaves the
    /// previous state untouched.
    ///
    /// # Errors
    /// * `Authentication` - the API answered with returnCode 3509, or sent no token
    /// * `Deserialization` - the login body carries no customer identifier
    /// * `Network` / `Unauthorized` / `Unexpected` - transport or HTTP failure
    pub async fn login(&self, username: &str, password: &str) -> Result<ApiResponse, AppError> {
        let body = LoginRequest {
            user_name: username,
            password,
        };

        debug!("Sending login request for user: {}", username);

        let current_token = self.session.read().await.auth_token.clone();
        let response = self
            .http
            .request(
                Method::POST,
                paths::LOGIN,
                current_token.as_deref(),
                &[],
                Some(&body),
            )
            .await?;

        if response.return_code() == Some(LOGIN_FAILED_RETURN_CODE) {
            let message = response
                .return_message()
                .unwrap_or("login rejected")
                .to_string();
            error!("Login rejected: {}", message);
            return Err(AppError::Authentication(message));
        }

        let response = response.error_for_status()?;

        let token = match response.header(AUTH_TOKEN_HEADER) {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => {
                error!("{} header not found in login response", AUTH_TOKEN_HEADER);
                return Err(AppError::Authentication(format!(
                    "{AUTH_TOKEN_HEADER} missing"
                )));
            }
        };

        let user = AuthenticatedUser::try_from(response.body.clone())
            .map_err(|e| AppError::Deserialization(format!("login response: {e}")))?;

        let customer_id = user.customer_id_str();
        {
            let mut session = self.session.write().await;
            session.auth_token = Some(token);
            session.user = Some(user);
        }

        info!("✓ Login successful, customer: {}", customer_id);
        Ok(response)
    }

    /// Sets the session token without logging in
    pub async fn set_auth_code(&self, token: &str) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "auth code must not be empty".to_string(),
            ));
        }

        self.session.write().await.auth_token = Some(token.to_string());
        debug!("Auth code set manually");
        Ok(())
    }

    /// Sets the authenticated user without logging in
    pub async fn set_user(&self, user: Value) -> Result<(), AppError> {
        let user = AuthenticatedUser::try_from(user)?;
        debug!("User set manually, customer: {}", user.customer_id_str());
        self.session.write().await.user = Some(user);
        Ok(())
    }

    /// Forgets the token and the user
    pub async fn logout(&self) {
        info!("Logging out");
        *self.session.write().await = Session::default();
    }
}
