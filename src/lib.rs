//! # BulkBite
//!
//! A group-buying marketplace backend. Vendors (buyers) pool their demand into
//! group orders against a supplier's product; once a group reaches its target
//! quantity it is completed and unlocks the bulk price.
//!
//! ## Features
//!
//! - **Order Aggregation**: every order is folded into its group's running
//!   total in the same transaction that records it
//! - **Group Lifecycle**: `active`, `completed` or `expired`, evaluated from
//!   quantities and deadline
//! - **Capacity Enforcement**: orders that would overshoot a group's target
//!   are rejected
//! - **Transactional Store**: serialized write transactions with rollback,
//!   unique emails and foreign keys enforced
//! - **Identity Resolution**: email-based login that creates vendors or
//!   suppliers on first sight
//! - **Typed Errors**: every failure maps to an HTTP status and a stable code
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bulkbite::prelude::*;
//!
//! let service = MarketService::new(Arc::new(InMemoryMarketStore::new()));
//!
//! ServerBuilder::new()
//!     .with_service(service)
//!     .register_module(MarketplaceModule)?
//!     .serve("127.0.0.1:5000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod seed;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        aggregation::GroupStatus,
        entity::{Actor, Coordinates, Entity},
        error::{EntityError, MarketError, MarketResult, StorageError, ValidationError},
        field::FieldFormat,
        module::Module,
        service::{GroupPolicy, MarketService},
        store::{MarketStore, ReadTx, Record, StoreError, Tables, WriteTx},
        validation::{EntityValidationConfig, ValidatableEntity, Validated},
    };

    // === Entities ===
    pub use crate::entities::{
        Created, Group, MarketplaceModule, Order, Product, Review, Supplier, Vendor,
        group::{GroupSnapshot, GroupView, NewGroup},
        identity::{Identity, IdentityResponse, Login, Role, Signup},
        mapdata::{MapData, MapPoint},
        order::{GroupOrders, NewOrder, OrderStatus, OrderView, PlacedOrder},
        product::{NewProduct, ProductView},
        review::{NewReview, ReviewView, SupplierReviews},
        supplier::SupplierView,
    };

    // === Storage ===
    pub use crate::storage::InMemoryMarketStore;

    // === Config ===
    pub use crate::config::{CorsConfig, GroupsConfig, MarketConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, RestExposure, ServerBuilder};

    // === Seed ===
    pub use crate::seed::seed_demo_data;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
