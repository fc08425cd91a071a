//! Entity registry for managing resource descriptors and building their routes

use axum::Router;
use std::collections::HashMap;

/// Trait that describes how to build routes for a resource
///
/// Each resource (product, group, order, ...) implements this trait to
/// provide its routes. Paths are relative to the API prefix.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "group")
    fn entity_type(&self) -> &str;

    /// The plural form (e.g., "groups")
    fn plural(&self) -> &str;

    /// Build the routes for this resource, with their state applied
    fn build_routes(&self) -> Router;
}

/// Registry for all resources in the application
///
/// This registry collects descriptors from all registered modules and
/// generates a router with all their routes.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: HashMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register a descriptor
    ///
    /// The entity type name will be used as the key.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered routes
    pub fn build_routes(&self) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes());
        }

        router
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
