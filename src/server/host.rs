//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds everything an exposure needs to serve the API: the
//! shared service and the registry of resource descriptors. It knows nothing
//! about the transport.

use crate::config::CorsConfig;
use crate::core::service::MarketService;
use crate::server::entity_registry::EntityRegistry;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerBuilder::new()
///     .with_service(service)
///     .register_module(MarketplaceModule)?
///     .build_host()?;
///
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Service shared by every handler
    pub service: MarketService,

    /// Entity registry for resource routes
    pub entity_registry: EntityRegistry,

    /// Cross-origin policy applied by HTTP exposures
    pub cors: CorsConfig,
}

impl ServerHost {
    /// Build the host from builder components
    pub fn from_builder_components(
        service: MarketService,
        entity_registry: EntityRegistry,
        cors: CorsConfig,
    ) -> Self {
        Self {
            service,
            entity_registry,
            cors,
        }
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// Check if host is properly initialized
    pub fn is_ready(&self) -> bool {
        !self.entity_registry.entity_types().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryMarketStore;
    use std::sync::Arc;

    fn make_host() -> ServerHost {
        ServerHost::from_builder_components(
            MarketService::new(Arc::new(InMemoryMarketStore::new())),
            EntityRegistry::new(),
            CorsConfig::default(),
        )
    }

    #[test]
    fn test_entity_types_empty_registry() {
        let host = make_host();
        assert!(host.entity_types().is_empty());
    }

    #[test]
    fn test_is_ready_without_resources_returns_false() {
        let host = make_host();
        assert!(!host.is_ready());
    }
}
