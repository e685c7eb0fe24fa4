mod common;

use axum_test::TestServer;
use common::{create_test_app_state, create_test_server, fund_wallet, seed_listing};
use http::StatusCode;
use rentahan_core::app_state::AppState;
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use uuid::Uuid;
use wiremock::MockServer;

async fn test_fixture() -> (Arc<AppState>, TestServer) {
    let mock_server = MockServer::start().await;
    let state = create_test_app_state(
        &mock_server.uri(),
        &format!("{}/otp", mock_server.uri()),
    );
    let server = create_test_server(state.clone());
    (state, server)
}

/// Drive a booking through the whole lifecycle so reviews unlock.
async fn completed_booking(
    state: &AppState,
    server: &TestServer,
) -> (String, Uuid, Uuid, Uuid) {
    let listing = seed_listing(state);
    let renter = Uuid::new_v4();
    fund_wallet(state, renter, 200_000);

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

    for (action, actor) in [
        ("accept", listing.owner_id),
        ("pickup", listing.owner_id),
        ("pickup", renter),
        ("return", renter),
        ("return", listing.owner_id),
    ] {
        server
            .post(&format!("/api/bookings/{}/{}", booking_id, action))
            .json(&json!({ "actor_id": actor, "expected_version": null }))
            .await
            .assert_status(StatusCode::OK);
    }

    (booking_id, listing.owner_id, renter, listing.id)
}

#[tokio::test]
#[serial]
async fn duplicate_review_is_rejected_and_first_stands() {
    let (state, server) = test_fixture().await;
    let (booking_id, owner, renter, _listing_id) = completed_booking(&state, &server).await;

    let first = server
        .post(&format!("/api/bookings/{}/reviews", booking_id))
        .json(&json!({
            "author_id": renter,
            "subject_kind": "owner",
            "rating": 5,
            "text": "Smooth handover, very accommodating",
            "tags": ["Friendly", "Responsive"]
        }))
        .await;
    first.assert_status(StatusCode::OK);

    let second = server
        .post(&format!("/api/bookings/{}/reviews", booking_id))
        .json(&json!({
            "author_id": renter,
            "subject_kind": "owner",
            "rating": 1,
            "tags": []
        }))
        .await;
    second.assert_status(StatusCode::CONFLICT);

    // The first review's rating is what the average reflects.
    let average = server
        .get(&format!("/api/reviews/{}/average", owner))
        .await;
    average.assert_status(StatusCode::OK);
    let average: serde_json::Value = average.json();
    assert_eq!(average["average"], 5.0);
    assert_eq!(average["count"], 1);
}

#[tokio::test]
#[serial]
async fn reviews_unlock_only_after_completion() {
    let (state, server) = test_fixture().await;
    let listing = seed_listing(&state);
    let renter = Uuid::new_v4();

    let booking = server
        .post("/api/bookings")
        .json(&json!({
            "listing_id": listing.id,
            "renter_id": renter,
            "start_date": "2025-12-01",
            "end_date": "2025-12-02"
        }))
        .await;
    let booking: serde_json::Value = booking.json();
    let booking_id = booking["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/bookings/{}/reviews", booking_id))
        .json(&json!({
            "author_id": renter,
            "subject_kind": "owner",
            "rating": 4,
            "tags": []
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn both_sides_and_the_item_can_be_reviewed() {
    let (state, server) = test_fixture().await;
    let (booking_id, owner, renter, listing_id) = completed_booking(&state, &server).await;

    // Renter reviews the owner and the item; owner reviews the renter.
    for (author, subject_kind, rating, tags) in [
        (renter, "owner", 5, json!(["Helpful"])),
        (renter, "item", 4, json!(["Good Condition", "As Described"])),
        (owner, "renter", 5, json!(["Respectful"])),
    ] {
        let response = server
            .post(&format!("/api/bookings/{}/reviews", booking_id))
            .json(&json!({
                "author_id": author,
                "subject_kind": subject_kind,
                "rating": rating,
                "tags": tags
            }))
            .await;
        response.assert_status(StatusCode::OK);
    }

    let item_average = server
        .get(&format!("/api/reviews/{}/average", listing_id))
        .await;
    let item_average: serde_json::Value = item_average.json();
    assert_eq!(item_average["average"], 4.0);

    let renter_average = server
        .get(&format!("/api/reviews/{}/average", renter))
        .await;
    let renter_average: serde_json::Value = renter_average.json();
    assert_eq!(renter_average["average"], 5.0);
}

#[tokio::test]
#[serial]
async fn owner_cannot_review_the_item() {
    let (state, server) = test_fixture().await;
    let (booking_id, owner, _renter, _listing_id) = completed_booking(&state, &server).await;

    let response = server
        .post(&format!("/api/bookings/{}/reviews", booking_id))
        .json(&json!({
            "author_id": owner,
            "subject_kind": "item",
            "rating": 3,
            "tags": []
        }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn unknown_tags_and_bad_ratings_are_rejected() {
    let (state, server) = test_fixture().await;
    let (booking_id, _owner, renter, _listing_id) = completed_booking(&state, &server).await;

    let bad_tag = server
        .post(&format!("/api/bookings/{}/reviews", booking_id))
        .json(&json!({
            "author_id": renter,
            "subject_kind": "item",
            "rating": 4,
            "tags": ["Friendly"]
        }))
        .await;
    bad_tag.assert_status(StatusCode::BAD_REQUEST);

    let bad_rating = server
        .post(&format!("/api/bookings/{}/reviews", booking_id))
        .json(&json!({
            "author_id": renter,
            "subject_kind": "owner",
            "rating": 6,
            "tags": []
        }))
        .await;
    bad_rating.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn unreviewed_subject_has_null_average() {
    let (_state, server) = test_fixture().await;

    let response = server
        .get(&format!("/api/reviews/{}/average", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["average"].is_null());
    assert_eq!(body["count"], 0);
}
