//! Review entity module
//!
//! Reviews are submitted and listed through the supplier routes.

pub mod model;

pub use model::{NewReview, Review, ReviewView, SupplierReviews};
