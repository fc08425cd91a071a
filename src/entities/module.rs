//! Module definition for the marketplace
//!
//! Mounts every marketplace resource:
//! - Identity: login and signup
//! - Products: supplier catalogue
//! - Groups: pooled demand with a target quantity
//! - Orders: vendor commitments aggregated into groups
//! - Suppliers: listing and reviews
//! - Map data: geographic listing

use super::group::GroupDescriptor;
use super::identity::IdentityDescriptor;
use super::mapdata::MapDataDescriptor;
use super::order::OrderDescriptor;
use super::product::ProductDescriptor;
use super::supplier::SupplierDescriptor;
use crate::core::module::Module;
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityRegistry;

/// Marketplace module
pub struct MarketplaceModule;

impl Module for MarketplaceModule {
    fn name(&self) -> &str {
        "bulkbite-marketplace"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["identity", "product", "group", "order", "supplier", "mapdata"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry, service: &MarketService) {
        registry.register(Box::new(IdentityDescriptor::new(service.clone())));
        registry.register(Box::new(ProductDescriptor::new(service.clone())));
        registry.register(Box::new(GroupDescriptor::new(service.clone())));
        registry.register(Box::new(OrderDescriptor::new(service.clone())));
        registry.register(Box::new(SupplierDescriptor::new(service.clone())));
        registry.register(Box::new(MapDataDescriptor::new(service.clone())));
    }
}
