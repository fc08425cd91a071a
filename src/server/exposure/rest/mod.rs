//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router`: health checks at
//! the root, every resource route under `/api`, with request tracing and the
//! configured CORS policy layered on top.

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Prefix of every resource route
pub const API_PREFIX: &str = "/api";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host containing all server state
    /// * `custom_routes` - Additional routes, merged at the root
    ///
    /// # Returns
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - Resource routes under `/api`
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let entity_routes = host.entity_registry.build_routes();

        let mut app = Self::health_routes().nest(API_PREFIX, entity_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        let cors = if host.cors.permissive {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        };

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "bulkbite"
        }))
    }
}
