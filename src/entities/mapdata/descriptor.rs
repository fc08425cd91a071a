//! Descriptor for the map data route

use super::handlers::map_data;
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};

pub struct MapDataDescriptor {
    pub service: MarketService,
}

impl MapDataDescriptor {
    pub fn new(service: MarketService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for MapDataDescriptor {
    fn entity_type(&self) -> &str {
        "mapdata"
    }

    fn plural(&self) -> &str {
        "mapdata"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/mapdata", get(map_data))
            .with_state(self.service.clone())
    }
}
