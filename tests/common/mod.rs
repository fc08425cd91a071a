//! Shared harness for the HTTP integration tests
//!
//! Each test gets its own in-memory store, a `TestServer` over the full
//! router and helpers that create records through the public API.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use bulkbite::prelude::*;
use serde_json::{Value, json};

pub struct TestApp {
    pub server: TestServer,
    pub service: MarketService,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(MarketService::new(Arc::new(InMemoryMarketStore::new())))
}

pub fn spawn_app_with(service: MarketService) -> TestApp {
    let router = ServerBuilder::new()
        .with_service(service.clone())
        .register_module(MarketplaceModule)
        .expect("module registers")
        .build()
        .expect("router builds");

    TestApp {
        server: TestServer::new(router),
        service,
    }
}

pub fn id_of(body: &Value) -> Uuid {
    body["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("response carries an id")
}

impl TestApp {
    /// Resolve (or create) a vendor by email
    pub async fn vendor(&self, email: &str) -> Uuid {
        let response = self
            .server
            .post("/api/login")
            .json(&json!({ "email": email, "role": "vendor" }))
            .await;
        response.assert_status_ok();
        Uuid::parse_str(response.json::<Value>()["user"]["id"].as_str().unwrap()).unwrap()
    }

    /// Register a supplier, optionally with coordinates
    pub async fn supplier(&self, email: &str, name: &str, position: Option<(f64, f64)>) -> Uuid {
        let mut body = json!({ "email": email, "role": "supplier", "name": name });
        if let Some((latitude, longitude)) = position {
            body["latitude"] = json!(latitude);
            body["longitude"] = json!(longitude);
        }
        let response = self.server.post("/api/signup").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        Uuid::parse_str(response.json::<Value>()["user"]["id"].as_str().unwrap()).unwrap()
    }

    pub async fn product(&self, supplier_id: Uuid, name: &str, price: f64) -> Uuid {
        let response = self
            .server
            .post("/api/products")
            .json(&json!({ "name": name, "price": price, "unit": "kg", "supplier_id": supplier_id }))
            .await;
        response.assert_status(StatusCode::CREATED);
        id_of(&response.json())
    }

    pub async fn group(&self, product_id: Uuid, created_by: Uuid, target: u32, price: f64) -> Uuid {
        let response = self
            .server
            .post("/api/groups")
            .json(&json!({
                "name": "Tomato Bulk Buy",
                "target_quantity": target,
                "price_per_unit": price,
                "product_id": product_id,
                "created_by": created_by,
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        id_of(&response.json())
    }

    pub async fn order(&self, vendor_id: Uuid, group_id: Uuid, quantity: u32) -> TestResponse {
        self.server
            .post("/api/orders")
            .json(&json!({ "quantity": quantity, "vendor_id": vendor_id, "group_id": group_id }))
            .await
    }

    pub async fn get_group(&self, group_id: Uuid) -> Value {
        let response = self.server.get(&format!("/api/groups/{}", group_id)).await;
        response.assert_status_ok();
        response.json()
    }

    /// A vendor, a supplier, a product and a fresh group with the given target
    pub async fn market_with_group(&self, target: u32, price: f64) -> (Uuid, Uuid) {
        let vendor = self.vendor("vendor1@example.com").await;
        let supplier = self
            .supplier("supplier1@example.com", "Fresh Produce Co", None)
            .await;
        let product = self.product(supplier, "Fresh Tomatoes", 2.50).await;
        let group = self.group(product, vendor, target, price).await;
        (vendor, group)
    }

    /// Sum of the quantities of every order placed against a group
    pub async fn ordered_quantity(&self, group_id: Uuid) -> u32 {
        let tx = self.service.store().read().await.unwrap();
        tx.tables()
            .orders
            .iter()
            .filter(|order| order.group_id == group_id)
            .map(|order| order.quantity)
            .sum()
    }
}
