//! Supplier entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;

pub use descriptor::SupplierDescriptor;
pub use model::{Supplier, SupplierView};
