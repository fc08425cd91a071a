//! Descriptor for the identity routes

use super::handlers::{login, signup};
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::post};

/// Descriptor for login and signup
pub struct IdentityDescriptor {
    pub service: MarketService,
}

impl IdentityDescriptor {
    pub fn new(service: MarketService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for IdentityDescriptor {
    fn entity_type(&self) -> &str {
        "identity"
    }

    fn plural(&self) -> &str {
        "identities"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/login", post(login))
            .route("/signup", post(signup))
            .with_state(self.service.clone())
    }
}
