//! Comment API tests

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{TestApp, TestUser};

async fn comment(app: &TestApp, user: &TestUser, trip_id: &str, content: &str) -> Value {
    let (status, body) = app
        .send(
            Method::POST,
            &format!("/comments/{}/comments", trip_id),
            Some(&user.token),
            Some(json!({ "content": content })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create comment: {}", body);
    body
}

#[tokio::test]
async fn test_any_user_can_comment_and_read() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;
    let trip = app.create_trip(&alice, "Lisbon").await;
    let trip_id = trip["id"].as_str().unwrap();

    let created = comment(&app, &bob, trip_id, "Try the pastel de nata").await;
    assert_eq!(created["user_id"], bob.id.as_str());
    assert_eq!(created["trip_id"], trip_id);

    let (status, list) = app
        .send(
            Method::GET,
            &format!("/comments/{}/comments", trip_id),
            Some(&alice.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, single) = app
        .send(
            Method::GET,
            &format!("/comments/{}/comments/{}", trip_id, created["id"].as_str().unwrap()),
            Some(&alice.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(single["content"], "Try the pastel de nata");
}

#[tokio::test]
async fn test_comment_on_missing_trip() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/comments/{}/comments", Uuid::new_v4()),
            Some(&alice.token),
            Some(json!({"content": "hello"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Trip not found");
}

#[tokio::test]
async fn test_empty_content_is_rejected() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let trip = app.create_trip(&alice, "Lisbon").await;

    let (status, _) = app
        .send(
            Method::POST,
            &format!("/comments/{}/comments", trip["id"].as_str().unwrap()),
            Some(&alice.token),
            Some(json!({"content": "  "})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_author_can_edit_or_delete() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;
    let trip = app.create_trip(&alice, "Lisbon").await;
    let trip_id = trip["id"].as_str().unwrap();
    let created = comment(&app, &alice, trip_id, "first").await;
    let uri = format!("/comments/{}/comments/{}", trip_id, created["id"].as_str().unwrap());

    let (status, _) = app
        .send(Method::PUT, &uri, Some(&bob.token), Some(json!({"content": "hijack"})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&bob.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, updated) = app
        .send(Method::PUT, &uri, Some(&alice.token), Some(json!({"content": "edited"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["content"], "edited");

    let (status, body) = app.send(Method::DELETE, &uri, Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = app.send(Method::GET, &uri, Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_trip_removes_its_comments() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let trip = app.create_trip(&alice, "Lisbon").await;
    let trip_id = trip["id"].as_str().unwrap();
    comment(&app, &alice, trip_id, "first").await;

    let (status, _) = app
        .send(Method::DELETE, &format!("/trips/{}", trip_id), Some(&alice.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = app
        .send(
            Method::GET,
            &format!("/comments/{}/comments", trip_id),
            Some(&alice.token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_comments_require_token() {
    let app = TestApp::new().await;
    let (status, _) = app
        .send(
            Method::GET,
            &format!("/comments/{}/comments", Uuid::new_v4()),
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
