//! Order entity model with validation and pricing

use crate::core::error::{MarketError, MarketResult};
use crate::core::field::FieldFormat;
use crate::core::validation::{EntityValidationConfig, ValidatableEntity, filters, validators};
use crate::entities::group::GroupSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest accepted gap between a supplied and a computed total price
const PRICE_TOLERANCE: f64 = 0.005;

/// Fulfilment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
}

/// A vendor's committed quantity against a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub quantity: u32,
    pub total_price: f64,
    pub status: OrderStatus,
    pub vendor_id: Uuid,
    pub group_id: Uuid,
    pub created_at: DateTime<Utc>,
}

crate::impl_entity!(Order, "order", "orders");

pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Payload of `POST /orders`
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub quantity: u32,
    pub vendor_id: Uuid,
    pub group_id: Uuid,
    /// Derived from the group's unit price when omitted
    pub total_price: Option<f64>,
}

impl ValidatableEntity for NewOrder {
    fn validation_config() -> EntityValidationConfig {
        EntityValidationConfig::new()
            .validate("quantity", validators::required())
            .validate("quantity", validators::positive_integer())
            .validate("vendor_id", validators::required())
            .validate("vendor_id", validators::format(FieldFormat::Uuid))
            .validate("group_id", validators::required())
            .validate("group_id", validators::format(FieldFormat::Uuid))
            .filter("total_price", filters::round_decimals(2))
            .validate("total_price", validators::positive())
    }
}

impl NewOrder {
    /// Total for this order at `price_per_unit`.
    ///
    /// A supplied total must match the computed one to the cent.
    pub fn total_price(&self, price_per_unit: f64) -> MarketResult<f64> {
        let expected = round_cents(f64::from(self.quantity) * price_per_unit);
        if !expected.is_finite() {
            return Err(MarketError::invalid_field(
                "total_price",
                format!(
                    "{} x {} does not fit in a price",
                    self.quantity, price_per_unit
                ),
            ));
        }
        match self.total_price {
            Some(supplied) if (supplied - expected).abs() > PRICE_TOLERANCE => {
                Err(MarketError::invalid_field(
                    "total_price",
                    format!(
                        "must equal quantity x price_per_unit ({} x {:.2} = {:.2})",
                        self.quantity, price_per_unit, expected
                    ),
                ))
            }
            _ => Ok(expected),
        }
    }

    pub fn into_order(self, total_price: f64, now: DateTime<Utc>) -> Order {
        Order {
            id: Uuid::new_v4(),
            quantity: self.quantity,
            total_price,
            status: OrderStatus::Pending,
            vendor_id: self.vendor_id,
            group_id: self.group_id,
            created_at: now,
        }
    }
}

/// Order as listed by `GET /orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: Uuid,
    pub quantity: u32,
    pub total_price: f64,
    pub status: OrderStatus,
    pub group_id: Uuid,
    pub group_name: String,
    pub vendor_id: Uuid,
    pub vendor_name: String,
    pub created_at: DateTime<Utc>,
}

/// Orders of one group, as listed by `GET /groups/{id}/orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupOrders {
    pub group_id: Uuid,
    pub group_name: String,
    pub price_per_unit: f64,
    /// Product price outside the group, when the product still exists
    pub list_price: Option<f64>,
    pub order_count: usize,
    pub total_quantity: u64,
    pub total_amount: f64,
    pub savings: Option<f64>,
    pub orders: Vec<OrderView>,
}

/// Response of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub success: bool,
    pub id: Uuid,
    pub group: GroupSnapshot,
}
