mod common;

use common::{create_test_app_state, create_test_server};
use http::StatusCode;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[serial]
async fn repeated_top_up_cannot_double_credit() {
    let mock_server = MockServer::start().await;

    // The gateway must only ever be charged once for one idempotency key.
    Mock::given(method("POST"))
        .and(path("/charges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": null,
            "reference_id": "gw_ref_once"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = create_test_app_state(
        &mock_server.uri(),
        &format!("{}/otp", mock_server.uri()),
    );
    let server = create_test_server(state.clone());
    let account_id = Uuid::new_v4();

    let top_up = json!({
        "amount": 30_000,
        "provider": "gcash",
        "idempotency_key": "topup_idemp_1"
    });

    let first = server
        .post(&format!("/api/wallets/{}/top_up", account_id))
        .json(&top_up)
        .await;
    first.assert_status(StatusCode::OK);
    let first: serde_json::Value = first.json();

    let second = server
        .post(&format!("/api/wallets/{}/top_up", account_id))
        .json(&top_up)
        .await;
    second.assert_status(StatusCode::OK);
    let second: serde_json::Value = second.json();

    // Same intent, same reference, one ledger entry.
    assert_eq!(first["transaction_id"], second["transaction_id"]);

    let wallet = server
        .get(&format!("/api/wallets/{}", account_id))
        .await;
    let wallet: serde_json::Value = wallet.json();
    assert_eq!(wallet["balance"], 30_000);

    let transactions = server
        .get(&format!("/api/wallets/{}/transactions", account_id))
        .await;
    let transactions: serde_json::Value = transactions.json();
    assert_eq!(transactions["transactions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn same_key_on_other_account_is_a_fresh_top_up() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/charges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": null,
            "reference_id": "gw_ref_two"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let state = create_test_app_state(
        &mock_server.uri(),
        &format!("{}/otp", mock_server.uri()),
    );
    let server = create_test_server(state);

    let top_up = json!({
        "amount": 15_000,
        "provider": "maya",
        "idempotency_key": "topup_shared_key"
    });

    let first_account = Uuid::new_v4();
    let second_account = Uuid::new_v4();

    let first = server
        .post(&format!("/api/wallets/{}/top_up", first_account))
        .json(&top_up)
        .await;
    first.assert_status(StatusCode::OK);

    let second = server
        .post(&format!("/api/wallets/{}/top_up", second_account))
        .json(&top_up)
        .await;
    second.assert_status(StatusCode::OK);

    let first: serde_json::Value = first.json();
    let second: serde_json::Value = second.json();
    assert_ne!(first["transaction_id"], second["transaction_id"]);
}
