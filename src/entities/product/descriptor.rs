//! Entity descriptor for Product

use super::handlers::{create_product, get_product, list_products};
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Product entity
pub struct ProductDescriptor {
    pub service: MarketService,
}

impl ProductDescriptor {
    pub fn new(service: MarketService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for ProductDescriptor {
    fn entity_type(&self) -> &str {
        "product"
    }

    fn plural(&self) -> &str {
        "products"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/products", get(list_products).post(create_product))
            .route("/products/{id}", get(get_product))
            .with_state(self.service.clone())
    }
}
