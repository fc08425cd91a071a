//! Group entity model with validation and filtering

use crate::core::aggregation::{self, GroupStatus};
use crate::core::error::MarketError;
use crate::core::field::FieldFormat;
use crate::core::validation::{EntityValidationConfig, ValidatableEntity, filters, validators};
use crate::entities::product::MAX_UNIT_PRICE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pooled demand against one product
///
/// `current_quantity` is the sum of the quantities of the group's orders and
/// never exceeds `target_quantity`. `status` is the status recorded by the
/// last aggregation; readers use [`aggregation::effective_status`] so an
/// elapsed deadline shows as expired without a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_quantity: u32,
    pub current_quantity: u32,
    pub price_per_unit: f64,
    pub deadline: Option<DateTime<Utc>>,
    pub status: GroupStatus,
    pub product_id: Uuid,
    /// Vendor who opened the group
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

crate::impl_entity!(Group, "group", "groups");

/// Payload of `POST /groups`
#[derive(Debug, Clone, Deserialize)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
    pub target_quantity: u32,
    pub price_per_unit: f64,
    pub product_id: Uuid,
    pub created_by: Uuid,
    pub deadline: Option<DateTime<Utc>>,
}

impl ValidatableEntity for NewGroup {
    fn validation_config() -> EntityValidationConfig {
        EntityValidationConfig::new()
            .filter("name", filters::trim())
            .validate("name", validators::required())
            .validate("name", validators::max_length(200))
            .filter("description", filters::trim())
            .validate("target_quantity", validators::required())
            .validate("target_quantity", validators::positive_integer())
            .filter("price_per_unit", filters::round_decimals(2))
            .validate("price_per_unit", validators::required())
            .validate("price_per_unit", validators::positive())
            .validate("price_per_unit", validators::max_value(MAX_UNIT_PRICE))
            .validate("product_id", validators::required())
            .validate("product_id", validators::format(FieldFormat::Uuid))
            .validate("created_by", validators::required())
            .validate("created_by", validators::format(FieldFormat::Uuid))
            .filter("deadline", filters::trim())
            .validate("deadline", validators::rfc3339())
    }

    fn check(&self) -> Result<(), MarketError> {
        match self.deadline {
            Some(deadline) if deadline <= Utc::now() => Err(MarketError::invalid_field(
                "deadline",
                "must be in the future",
            )),
            _ => Ok(()),
        }
    }
}

impl NewGroup {
    /// Build an empty, active group
    pub fn into_group(self, deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Group {
        Group {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description.filter(|d| !d.is_empty()),
            target_quantity: self.target_quantity,
            current_quantity: 0,
            price_per_unit: self.price_per_unit,
            deadline,
            status: GroupStatus::evaluate(0, self.target_quantity, deadline, now),
            product_id: self.product_id,
            created_by: self.created_by,
            created_at: now,
        }
    }
}

/// Group as listed by `GET /groups`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_quantity: u32,
    pub current_quantity: u32,
    pub remaining_quantity: u32,
    pub price_per_unit: f64,
    pub deadline: Option<DateTime<Utc>>,
    /// Effective at read time
    pub status: GroupStatus,
    pub product_id: Uuid,
    pub product_name: String,
    pub created_by: Uuid,
    pub creator_name: String,
}

impl GroupView {
    pub fn new(group: &Group, product_name: &str, creator_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
            target_quantity: group.target_quantity,
            current_quantity: group.current_quantity,
            remaining_quantity: aggregation::remaining_capacity(group),
            price_per_unit: group.price_per_unit,
            deadline: group.deadline,
            status: aggregation::effective_status(group, now),
            product_id: group.product_id,
            product_name: product_name.to_string(),
            created_by: group.created_by,
            creator_name: creator_name.to_string(),
        }
    }
}

/// State of a group right after an order was folded into it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupSnapshot {
    pub id: Uuid,
    pub current_quantity: u32,
    pub status: GroupStatus,
}

impl From<&Group> for GroupSnapshot {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            current_quantity: group.current_quantity,
            status: group.status,
        }
    }
}
