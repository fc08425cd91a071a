//! API exposure modules
//!
//! Each exposure type consumes a `ServerHost` and produces a Router for its
//! protocol. REST is the only one the marketplace serves.

pub mod rest;

pub use rest::RestExposure;
