//! Identity resolution: login and signup for vendors and suppliers

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;

pub use descriptor::IdentityDescriptor;
pub use model::{Identity, IdentityResponse, Login, Role, Signup};
