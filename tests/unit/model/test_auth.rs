use loop_client::model::auth::{AuthenticatedUser, CUSTOMER_ID_FIELD};
use loop_client::prelude::AppError;
use serde_json::{Value, json};

#[test]
fn user_keeps_all_fields() {
    let user = AuthenticatedUser::try_from(json!({
        "customerId": "1",
        "firstName": "Jane",
        "accounts": [1, 2]
    }))
    .expect("valid user");

    assert_eq!(user.customer_id(), &json!("1"));
    assert_eq!(user.customer_id_str(), "1");
    assert_eq!(user.get("firstName"), Some(&json!("Jane")));
    assert_eq!(user.fields().len(), 3);
}

#[test]
fn numeric_customer_id_keeps_its_type() {
    let user = AuthenticatedUser::try_from(json!({"customerId": 1234})).expect("valid user");
    assert_eq!(user.customer_id(), &json!(1234));
    assert_eq!(user.customer_id_str(), "1234");
}

#[test]
fn user_without_customer_id_is_rejected() {
    let cases = vec![
        json!({}),
        json!({"customerId": null}),
        json!({"customerId": ""}),
        json!({"name": "Jane"}),
        Value::Null,
        json!("1"),
        json!([{"customerId": "1"}]),
    ];

    for case in cases {
        let err = AuthenticatedUser::try_from(case.clone()).err();
        assert!(
            matches!(err, Some(AppError::InvalidArgument(_))),
            "accepted {case}"
        );
    }
}

#[test]
fn deserialization_applies_the_same_rules() {
    let user: AuthenticatedUser =
        serde_json::from_str(r#"{"customerId": "9", "x": true}"#).expect("valid user");
    assert_eq!(user.customer_id_str(), "9");

    let err = serde_json::from_str::<AuthenticatedUser>("{}").unwrap_err();
    assert!(err.to_string().contains(CUSTOMER_ID_FIELD));
}

#[test]
fn user_serializes_back_to_the_original_object() {
    let original = json!({"customerId": "9", "x": true});
    let user = AuthenticatedUser::try_from(original.clone()).expect("valid user");
    assert_eq!(serde_json::to_value(&user).expect("serialize"), original);
    assert_eq!(Value::from(user), original);
}
