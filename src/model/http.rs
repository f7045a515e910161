/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::{AUTHORIZATION_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use reqwest::{Client, Method};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Thin HTTP transport for the Loop API
///
/// Owns the underlying `reqwest` client (user agent and timeout fixed at
/// construction) and turns paths into full URLs. Authentication state is not
/// kept here; callers pass the token of the request explicitly.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates the transport from the REST settings of `config`
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration the transport was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request, failing on non-2xx statuses
    pub async fn get(
        &self,
        path: &str,
        token: Option<&str>,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, path, token, query, None::<&()>)
            .await?
            .error_for_status()
    }

    /// Makes a POST request with a JSON body, failing on non-2xx statuses
    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::POST, path, token, &[], Some(body))
            .await?
            .error_for_status()
    }

    /// Makes a request and returns the response whatever its status
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<ApiResponse, AppError> {
        let url = self.config.rest_api.url(path);
        let auth_header_value;

        let mut headers = vec![
            ("Content-Type", "application/json; charset=UTF-8"),
            ("Accept", "application/json; charset=UTF-8"),
        ];

        if let Some(token) = token {
            auth_header_value = self.config.rest_api.authorization(token);
            headers.push((AUTHORIZATION_HEADER, auth_header_value.as_str()));
        }

        make_http_request(&self.http_client, method, &url, headers, query, body).await
    }
}

/// Sends a single HTTP request and reads the whole response
///
/// No status handling happens here: the response is returned for any status
/// the server sends, and only transport failures become errors. Use
/// [`ApiResponse::error_for_status`] to reject non-2xx answers.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query string pairs, URL-encoded by the transport
/// * `body` - Optional request body (serialized to JSON)
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, &str)],
    body: Option<&B>,
) -> Result<ApiResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());

    ApiResponse::from_response(response).await
}
