//! Identity resolution (login) and registration (signup)

mod common;

use axum::http::StatusCode;
use bulkbite::prelude::*;
use common::spawn_app;
use serde_json::{Value, json};

#[tokio::test]
async fn test_login_creates_then_resolves_the_same_vendor() {
    let app = spawn_app();

    let first: Value = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "Vendor1@Example.com" }))
        .await
        .json();
    assert_eq!(first["success"], true);
    assert_eq!(first["user"]["email"], "vendor1@example.com");
    assert_eq!(first["user"]["role"], "vendor");
    assert_eq!(first["user"]["name"], "New Vendor");
    assert!(first["user"]["created"].is_string());

    let second: Value = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "  vendor1@example.com ", "name": "Ignored" }))
        .await
        .json();
    assert_eq!(second["user"]["id"], first["user"]["id"]);
    assert_eq!(second["user"]["name"], "New Vendor");

    let tx = app.service.store().read().await.unwrap();
    assert_eq!(tx.tables().vendors.len(), 1);
}

#[tokio::test]
async fn test_login_roles_are_separate_collections() {
    let app = spawn_app();

    let vendor: Value = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "shared@example.com", "role": "vendor" }))
        .await
        .json();
    let supplier: Value = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "shared@example.com", "user_type": "supplier", "name": "Dairy Delights" }))
        .await
        .json();

    assert_ne!(vendor["user"]["id"], supplier["user"]["id"]);
    assert_eq!(supplier["user"]["role"], "supplier");
    assert_eq!(supplier["user"]["name"], "Dairy Delights");
}

#[tokio::test]
async fn test_concurrent_first_logins_create_one_record() {
    let app = spawn_app();

    let handles = (0..10).map(|_| {
        let service = app.service.clone();
        tokio::spawn(async move {
            service
                .resolve_identity(Login {
                    email: "rush@example.com".to_string(),
                    role: None,
                    user_type: None,
                    name: None,
                })
                .await
        })
    });
    let ids: Vec<Uuid> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap().unwrap().id)
        .collect();

    assert!(ids.iter().all(|id| *id == ids[0]));
    let tx = app.service.store().read().await.unwrap();
    assert_eq!(tx.tables().vendors.len(), 1);
}

#[tokio::test]
async fn test_login_rejects_invalid_email() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "not-an-email" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["fields"][0]["field"], "email");
}

#[tokio::test]
async fn test_signup_registers_and_rejects_duplicates() {
    let app = spawn_app();
    let body = json!({
        "email": "supplier1@example.com",
        "role": "supplier",
        "name": "Fresh Produce Co",
        "location": "Wholesale District",
        "latitude": 40.7505,
        "longitude": -73.9934,
        "description": "Fresh fruits and vegetables supplier",
    });

    let created = app.server.post("/api/signup").json(&body).await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(created.json::<Value>()["user"]["name"], "Fresh Produce Co");

    let duplicate = app.server.post("/api/signup").json(&body).await;
    duplicate.assert_status(StatusCode::CONFLICT);
    assert_eq!(duplicate.json::<Value>()["code"], "EMAIL_TAKEN");

    // Login resolves to the registered supplier
    let login: Value = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "supplier1@example.com", "role": "supplier" }))
        .await
        .json();
    assert_eq!(login["user"]["id"], created.json::<Value>()["user"]["id"]);
}

#[tokio::test]
async fn test_role_and_user_type_cannot_both_be_sent() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "shared@example.com", "role": "vendor", "user_type": "vendor" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["fields"][0]["field"], "role");

    let tx = app.service.store().read().await.unwrap();
    assert!(tx.tables().vendors.is_empty());
}

#[tokio::test]
async fn test_signup_requires_a_name() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/signup")
        .json(&json!({ "email": "vendor9@example.com", "role": "vendor" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["details"]["fields"][0]["field"], "name");
}
