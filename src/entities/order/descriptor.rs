//! Entity descriptor for Order

use super::handlers::{create_order, list_group_orders, list_orders};
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub service: MarketService,
}

impl OrderDescriptor {
    pub fn new(service: MarketService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route("/groups/{id}/orders", get(list_group_orders))
            .with_state(self.service.clone())
    }
}
