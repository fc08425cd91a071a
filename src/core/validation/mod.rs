//! Validation and filtering system
//!
//! Request payloads declare filters (normalization) and validators per field.
//! The [`Validated`] extractor applies them before a handler runs, so every
//! required field and format is checked before anything touches the store.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod validators;

pub use config::EntityValidationConfig;
pub use extractor::{ValidatableEntity, Validated};
