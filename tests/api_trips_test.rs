//! Trip API tests
//!
//! Covers the full flow from registration to an owned trip, and checks
//! that trips never leak across users.

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::TestApp;

#[tokio::test]
async fn test_register_login_create_trip_flow() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;

    let trip = app.create_trip(&alice, "Dolomites").await;
    assert_eq!(trip["user_id"], alice.id.as_str());
    assert_eq!(trip["name"], "Dolomites");

    let uri = format!("/trips/{}", trip["id"].as_str().unwrap());
    let (status, fetched) = app.send(Method::GET, &uri, Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["user_id"], alice.id.as_str());

    let bob = app.register_and_login("bob").await;
    let (status, body) = app.send(Method::GET, &uri, Some(&bob.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Trip not found");
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = TestApp::new().await;
    let (status, _) = app
        .send(Method::POST, "/trips", None, Some(json!({"name": "x"})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::POST, "/trips", Some("garbage"), Some(json!({"name": "x"})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_requires_name() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;

    let (status, body) = app
        .send(Method::POST, "/trips", Some(&alice.token), Some(json!({"region": "Alps"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "bad_request");
}

#[tokio::test]
async fn test_list_is_scoped_to_caller() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;

    app.create_trip(&alice, "One").await;
    app.create_trip(&alice, "Two").await;
    app.create_trip(&bob, "Three").await;

    let (status, trips) = app.send(Method::GET, "/trips", Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::OK);
    let trips = trips.as_array().unwrap();
    assert_eq!(trips.len(), 2);
    assert!(trips.iter().all(|t| t["user_id"] == alice.id.as_str()));
}

#[tokio::test]
async fn test_list_empty_is_array() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;

    let (status, trips) = app.send(Method::GET, "/trips", Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trips, json!([]));
}

#[tokio::test]
async fn test_get_with_bad_id() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;

    let (status, body) = app
        .send(Method::GET, "/trips/not-a-uuid", Some(&alice.token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid trip ID format");

    let uri = format!("/trips/{}", Uuid::new_v4());
    let (status, _) = app.send(Method::GET, &uri, Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_applies_non_empty_fields() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let trip = app.create_trip(&alice, "Dolomites").await;
    let uri = format!("/trips/{}", trip["id"].as_str().unwrap());

    let (status, updated) = app
        .send(
            Method::PUT,
            &uri,
            Some(&alice.token),
            Some(json!({"name": "", "description": "Via ferrata week"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Dolomites");
    assert_eq!(updated["region"], "Alps");
    assert_eq!(updated["description"], "Via ferrata week");
}

#[tokio::test]
async fn test_update_with_nothing_to_change() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let trip = app.create_trip(&alice, "Dolomites").await;
    let uri = format!("/trips/{}", trip["id"].as_str().unwrap());

    let (status, body) = app
        .send(Method::PUT, &uri, Some(&alice.token), Some(json!({"name": ""})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No fields to update");
}

#[tokio::test]
async fn test_other_user_cannot_update_or_delete() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;
    let trip = app.create_trip(&alice, "Dolomites").await;
    let uri = format!("/trips/{}", trip["id"].as_str().unwrap());

    let (status, _) = app
        .send(Method::PUT, &uri, Some(&bob.token), Some(json!({"name": "Mine now"})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&bob.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, unchanged) = app.send(Method::GET, &uri, Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged["name"], "Dolomites");
}

#[tokio::test]
async fn test_delete_trip() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let trip = app.create_trip(&alice, "Dolomites").await;
    let uri = format!("/trips/{}", trip["id"].as_str().unwrap());

    let (status, body) = app.send(Method::DELETE, &uri, Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Trip deleted successfully"}));

    let (status, _) = app.send(Method::GET, &uri, Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
