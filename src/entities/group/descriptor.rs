//! Entity descriptor for Group

use super::handlers::{create_group, get_group, list_groups};
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Group entity
pub struct GroupDescriptor {
    pub service: MarketService,
}

impl GroupDescriptor {
    pub fn new(service: MarketService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for GroupDescriptor {
    fn entity_type(&self) -> &str {
        "group"
    }

    fn plural(&self) -> &str {
        "groups"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/groups", get(list_groups).post(create_group))
            .route("/groups/{id}", get(get_group))
            .with_state(self.service.clone())
    }
}
