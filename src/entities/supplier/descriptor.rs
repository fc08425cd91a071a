//! Entity descriptor for Supplier

use super::handlers::{list_supplier_reviews, list_suppliers, submit_review};
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Supplier resource (reviews included)
pub struct SupplierDescriptor {
    pub service: MarketService,
}

impl SupplierDescriptor {
    pub fn new(service: MarketService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for SupplierDescriptor {
    fn entity_type(&self) -> &str {
        "supplier"
    }

    fn plural(&self) -> &str {
        "suppliers"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/suppliers", get(list_suppliers).post(submit_review))
            .route("/suppliers/{id}/reviews", get(list_supplier_reviews))
            .with_state(self.service.clone())
    }
}
