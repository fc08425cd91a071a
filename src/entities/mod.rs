//! Entities module - contains all marketplace resources

pub mod group;
pub mod identity;
pub mod macros;
pub mod mapdata;
pub mod module;
pub mod order;
pub mod product;
pub mod review;
pub mod supplier;
pub mod vendor;

// Re-export models for convenience
pub use group::Group;
pub use module::MarketplaceModule;
pub use order::Order;
pub use product::Product;
pub use review::Review;
pub use supplier::Supplier;
pub use vendor::Vendor;

use serde::Serialize;
use uuid::Uuid;

/// Body of a `201 Created` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Created {
    pub success: bool,
    pub id: Uuid,
}

impl Created {
    pub fn new(id: Uuid) -> Self {
        Self { success: true, id }
    }
}
