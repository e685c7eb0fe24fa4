mod common;

use common::{create_test_app_state, create_test_server, fund_wallet, seed_listing};
use http::StatusCode;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;
use wiremock::MockServer;

#[tokio::test]
#[serial]
async fn phone_numbers_are_blocked_and_plain_chat_passes() {
    let mock_server = MockServer::start().await;
    let state = create_test_app_state(
        &mock_server.uri(),
        &format!("{}/otp", mock_server.uri()),
    );
    let server = create_test_server(state.clone());

    let listing = seed_listing(&state);
    let renter = Uuid::new_v4();
    let booking = server
        .post("/api/bookings")
        .json(&json!({
            "listing_id": listing.id,
            "renter_id": renter,
            "start_date": "2025-11-01",
            "end_date": "2025-11-02"
        }))
        .await;
    booking.assert_status(StatusCode::OK);
    let booking: serde_json::Value = booking.json();
    let booking_id = booking["id"].as_str().unwrap().to_string();

    let blocked = server
        .post(&format!("/api/bookings/{}/messages", booking_id))
        .json(&json!({
            "sender_id": renter,
            "body": "Call me at 0917-123-4567"
        }))
        .await;
    blocked.assert_status(StatusCode::BAD_REQUEST);

    let allowed = server
        .post(&format!("/api/bookings/{}/messages", booking_id))
        .json(&json!({
            "sender_id": renter,
            "body": "Nasa 7/11 po ako"
        }))
        .await;
    allowed.assert_status(StatusCode::OK);

    // Only the allowed message (plus the creation system note) is stored.
    let messages = server
        .get(&format!("/api/bookings/{}/messages", booking_id))
        .await;
    let messages: serde_json::Value = messages.json();
    let bodies: Vec<&str> = messages["messages"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["kind"] == "text")
        .map(|m| m["body"].as_str().unwrap())
        .collect();
    assert_eq!(bodies, vec!["Nasa 7/11 po ako"]);
}

#[tokio::test]
#[serial]
async fn payment_app_mentions_are_blocked() {
    let mock_server = MockServer::start().await;
    let state = create_test_app_state(
        &mock_server.uri(),
        &format!("{}/otp", mock_server.uri()),
    );
    let server = create_test_server(state.clone());

    let listing = seed_listing(&state);
    let renter = Uuid::new_v4();
    let booking = server
        .post("/api/bookings")
        .json(&json!({
            "listing_id": listing.id,
            "renter_id": renter,
            "start_date": "2025-11-05",
            "end_date": "2025-11-06"
        }))
        .await;
    let booking: serde_json::Value = booking.json();
    let booking_id = booking["id"].as_str().unwrap().to_string();

    for body in [
        "pay me thru gcash na lang",
        "send it to my Maya",
        "transfer to my BPI account please",
    ] {
        let response = server
            .post(&format!("/api/bookings/{}/messages", booking_id))
            .json(&json!({ "sender_id": renter, "body": body }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    // A bank name without account context is ordinary conversation.
    let response = server
        .post(&format!("/api/bookings/{}/messages", booking_id))
        .json(&json!({
            "sender_id": renter,
            "body": "I work near the BPI branch"
        }))
        .await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn lifecycle_system_messages_appear_in_the_thread() {
    let mock_server = MockServer::start().await;
    let state = create_test_app_state(
        &mock_server.uri(),
        &format!("{}/otp", mock_server.uri()),
    );
    let server = create_test_server(state.clone());

    let listing = seed_listing(&state);
    let renter = Uuid::new_v4();
    fund_wallet(&state, renter, 200_000);

    let booking = server
        .post("/api/bookings")
        .json(&json!({
            "listing_id": listing.id,
            "renter_id": renter,
            "start_date": "2025-11-10",
            "end_date": "2025-11-11"
        }))
        .await;
    let booking: serde_json::Value = booking.json();
    let booking_id = booking["id"].as_str().unwrap().to_string();

    server
        .post(&format!("/api/bookings/{}/accept", booking_id))
        .json(&json!({ "actor_id": listing.owner_id, "expected_version": null }))
        .await
        .assert_status(StatusCode::OK);

    let messages = server
        .get(&format!("/api/bookings/{}/messages", booking_id))
        .await;
    let messages: serde_json::Value = messages.json();
    let system_bodies: Vec<&str> = messages["messages"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["kind"] == "system")
        .map(|m| m["body"].as_str().unwrap())
        .collect();

    assert_eq!(system_bodies.len(), 2);
    assert!(system_bodies[0].contains("Booking requested"));
    assert!(system_bodies[1].contains("Booking accepted"));
    // System messages carry no sender.
    assert!(messages["messages"][0]["sender_id"].is_null());
}

#[tokio::test]
#[serial]
async fn messages_for_unknown_booking_404() {
    let mock_server = MockServer::start().await;
    let state = create_test_app_state(
        &mock_server.uri(),
        &format!("{}/otp", mock_server.uri()),
    );
    let server = create_test_server(state);

    let response = server
        .get(&format!("/api/bookings/{}/messages", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
