//! Core module containing the fundamental traits and types of the marketplace

pub mod aggregation;
pub mod entity;
pub mod error;
pub mod field;
pub mod module;
pub mod query;
pub mod service;
pub mod store;
pub mod validation;

pub use aggregation::GroupStatus;
pub use entity::{Actor, Coordinates, Entity};
pub use error::{EntityError, MarketError, MarketResult, ValidationError};
pub use field::FieldFormat;
pub use module::Module;
pub use service::{GroupPolicy, MarketService};
pub use store::{MarketStore, ReadTx, Record, StoreError, Tables, WriteTx};
