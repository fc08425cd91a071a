//! Group entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;

pub use descriptor::GroupDescriptor;
pub use model::{Group, GroupSnapshot, GroupView, NewGroup};
