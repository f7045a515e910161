use loop_client::prelude::*;
use mockito::ServerGuard;
use serde_json::json;

/// Unreachable endpoint, for calls that must fail before touching the network
pub const DEAD_URL: &str = "http://127.0.0.1:1";

pub fn client_for(server: &ServerGuard) -> Client {
    Client::new(Some(&server.url())).expect("client")
}

/// Client with a user and token set, pointed at the mock server
pub async fn authenticated_client(server: &ServerGuard) -> Client {
    let client = client_for(server);
    client
        .set_auth_code("abc")
        .await
        .expect("token")
        .set_user(json!({"customerId": "1", "firstName": "Jane"}))
        .await
        .expect("user");
    client
}
