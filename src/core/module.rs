//! Module system
//!
//! A module groups the resources of one functional area and registers their
//! route descriptors with the server.

use crate::core::service::MarketService;
use crate::server::entity_registry::EntityRegistry;

/// Trait for a set of resources mounted together
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// List of resource types exposed by this module
    fn entity_types(&self) -> Vec<&str>;

    /// Register the descriptors of every resource with the entity registry
    ///
    /// Descriptors receive a handle on the shared service so their handlers
    /// all operate on the same store.
    fn register_entities(&self, registry: &mut EntityRegistry, service: &MarketService);
}
