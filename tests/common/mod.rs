//! Common test utilities and helpers
//!
//! Builds the real router over an in-memory store and drives it with
//! `tower::ServiceExt::oneshot`, so no port is bound.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::{json, Value};
use tower::ServiceExt;

use trip_planner::backend::auth::sessions::TokenCodec;
use trip_planner::backend::db::Database;
use trip_planner::backend::routes::create_router;
use trip_planner::backend::server::state::AppState;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// bcrypt's minimum cost, to keep tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Router plus the codec it was built with
pub struct TestApp {
    pub router: Router,
    pub tokens: TokenCodec,
    pub db: Database,
}

/// A registered and logged-in user
pub struct TestUser {
    pub id: String,
    pub token: String,
}

pub fn test_codec() -> TokenCodec {
    TokenCodec::new(TEST_SECRET, "trip-planner", Duration::hours(24))
}

impl TestApp {
    pub async fn new() -> Self {
        let db = Database::in_memory().await.expect("in-memory store");
        let tokens = test_codec();
        let state = AppState::new(db.clone(), tokens.clone(), TEST_BCRYPT_COST);

        Self {
            router: create_router(state),
            tokens,
            db,
        }
    }

    /// Send a request and return the status and decoded JSON body
    ///
    /// An empty body decodes to `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send_request(request).await
    }

    /// Send a prebuilt request
    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    /// Register `name` (email `name@example.com`, password `password123`)
    /// and log in
    pub async fn register_and_login(&self, name: &str) -> TestUser {
        let (status, user) = self
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({
                    "email": format!("{}@example.com", name),
                    "username": name,
                    "password": "password123",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register {}: {}", name, user);

        let (status, body) = self
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({
                    "email": format!("{}@example.com", name),
                    "password": "password123",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login {}: {}", name, body);

        TestUser {
            id: user["id"].as_str().unwrap().to_string(),
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    /// Create a trip for `user` and return its JSON
    pub async fn create_trip(&self, user: &TestUser, name: &str) -> Value {
        let (status, trip) = self
            .send(
                Method::POST,
                "/trips",
                Some(&user.token),
                Some(json!({ "name": name, "region": "Alps" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create trip: {}", trip);
        trip
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
