//! Review entity model and its request payload

use crate::core::field::FieldFormat;
use crate::core::validation::{EntityValidationConfig, ValidatableEntity, filters, validators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vendor's rating of a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    /// 1 to 5
    pub rating: u8,
    pub comment: Option<String>,
    pub vendor_id: Uuid,
    pub supplier_id: Uuid,
    pub created_at: DateTime<Utc>,
}

crate::impl_entity!(Review, "review", "reviews");

/// Payload of `POST /suppliers`
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub rating: u8,
    pub comment: Option<String>,
    pub vendor_id: Uuid,
    pub supplier_id: Uuid,
}

impl ValidatableEntity for NewReview {
    fn validation_config() -> EntityValidationConfig {
        EntityValidationConfig::new()
            .validate("rating", validators::required())
            .validate("rating", validators::positive_integer())
            .validate("rating", validators::range(1.0, 5.0))
            .filter("comment", filters::trim())
            .validate("comment", validators::max_length(2000))
            .validate("vendor_id", validators::required())
            .validate("vendor_id", validators::format(FieldFormat::Uuid))
            .validate("supplier_id", validators::required())
            .validate("supplier_id", validators::format(FieldFormat::Uuid))
    }
}

impl NewReview {
    pub fn into_review(self) -> Review {
        Review {
            id: Uuid::new_v4(),
            rating: self.rating,
            comment: self.comment.filter(|c| !c.is_empty()),
            vendor_id: self.vendor_id,
            supplier_id: self.supplier_id,
            created_at: Utc::now(),
        }
    }
}

/// Review as listed under a supplier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub id: Uuid,
    pub rating: u8,
    pub comment: Option<String>,
    pub vendor_id: Uuid,
    pub vendor_name: String,
    pub created_at: DateTime<Utc>,
}

/// Reviews of one supplier with their average rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierReviews {
    pub supplier_id: Uuid,
    pub count: usize,
    /// Rounded to two decimals, `null` when there are no reviews
    pub average_rating: Option<f64>,
    pub reviews: Vec<ReviewView>,
}

impl SupplierReviews {
    pub fn new(supplier_id: Uuid, reviews: Vec<ReviewView>) -> Self {
        let average_rating = (!reviews.is_empty()).then(|| {
            let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
            let average = f64::from(sum) / reviews.len() as f64;
            (average * 100.0).round() / 100.0
        });

        Self {
            supplier_id,
            count: reviews.len(),
            average_rating,
            reviews,
        }
    }
}
