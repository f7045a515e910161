use super::common::DEAD_URL;
use loop_client::prelude::*;

#[test]
fn client_without_base_url_uses_production_endpoint() {
    let client = Client::new(None).expect("client");
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    assert_eq!(client.config().rest_api.timeout_ms, DEFAULT_TIMEOUT_MS);
    assert_eq!(client.config().rest_api.timeout_ms, 5000);
}

#[test]
fn client_with_base_url_keeps_fixed_timeout() {
    let client = Client::new(Some("http://localhost:8080/api")).expect("client");
    assert_eq!(client.base_url(), "http://localhost:8080/api");
    assert_eq!(client.config().rest_api.timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn client_with_config_uses_it() {
    let mut config = Config::with_base_url("http://bank.local");
    config.rest_api.auth_scheme = "Bearer ".to_string();
    let client = Client::with_config(config.clone()).expect("client");
    assert_eq!(client.config(), &config);
}

#[tokio::test]
async fn new_client_is_not_authenticated() {
    let client = Client::new(Some(DEAD_URL)).expect("client");
    assert!(!client.is_authenticated().await);
    let session = client.get_session().await;
    assert!(session.auth_token.is_none());
    assert!(session.user.is_none());
}

#[tokio::test]
async fn every_data_call_requires_authentication() {
    let client = Client::new(Some(DEAD_URL)).expect("client");

    let results = vec![
        client.check_balance().await,
        client.check_expenditure(None).await,
        client.get_accounts().await,
        client.get_categories().await,
        client.get_transfer_types().await,
        client.get_bank_branches().await,
        client.get_msisdn_pesalinks("254700000000").await,
        client.check_if_loop_number("254700000000").await,
        client.send_to_mobile_money("254700000000", 100.0, None).await,
        client
            .send_via_pesalink("254700000000", 100.0, "0001", None)
            .await,
    ];

    for result in results {
        match result {
            Err(AppError::Precondition(msg)) => assert_eq!(msg, "not authenticated"),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}

#[tokio::test]
async fn token_alone_does_not_authenticate() {
    let client = Client::new(Some(DEAD_URL)).expect("client");
    client.set_auth_code("abc").await.expect("token");

    let err = client.check_balance().await.err().expect("should be Err");
    assert!(matches!(err, AppError::Precondition(_)));
}

#[tokio::test]
async fn bank_transfers_are_not_implemented() {
    let client = Client::new(Some(DEAD_URL)).expect("client");

    let rtgs = client.send_to_bank_via_rtgs().await.err().expect("should be Err");
    assert!(matches!(rtgs, AppError::NotImplemented(_)));

    let eft = client.send_to_bank_via_eft().await.err().expect("should be Err");
    assert!(matches!(eft, AppError::NotImplemented(_)));
}

#[tokio::test]
async fn transport_failure_surfaces_as_network_error() {
    let client = Client::new(Some(DEAD_URL)).expect("client");
    client
        .set_user(serde_json::json!({"customerId": "1"}))
        .await
        .expect("user");

    let err = client.get_accounts().await.err().expect("should be Err");
    assert!(matches!(err, AppError::Network(_)));
    assert!(err.is_upstream());
}

#[test]
fn client_is_shareable_between_tasks() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
}

#[test]
fn default_client_equals_new_without_base_url() {
    let client = Client::default();
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    assert_eq!(client.config(), Client::new(None).expect("client").config());
}

#[tokio::test]
async fn session_accessors_follow_setters() {
    let client = Client::new(Some(DEAD_URL)).expect("client");
    assert!(client.auth_token().await.is_none());
    assert!(client.user().await.is_none());

    client
        .set_auth_code("abc")
        .await
        .expect("token")
        .set_user(serde_json::json!({"customerId": "1"}))
        .await
        .expect("user");

    assert_eq!(client.auth_token().await.as_deref(), Some("abc"));
    let user = client.user().await.expect("user set");
    assert_eq!(user.customer_id_str(), "1");

    client.logout().await;
    assert!(client.auth_token().await.is_none());
    assert!(client.user().await.is_none());
}
