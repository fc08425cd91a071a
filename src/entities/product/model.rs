//! Product entity model with validation and filtering

use crate::core::field::FieldFormat;
use crate::core::validation::{EntityValidationConfig, ValidatableEntity, filters, validators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_UNIT: &str = "piece";

/// Upper bound on any per-unit price the market accepts
pub const MAX_UNIT_PRICE: f64 = 1_000_000.0;

/// An item a supplier sells in bulk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub unit: String,
    pub min_quantity: u32,
    pub supplier_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: String, price: f64, supplier_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            price,
            unit: DEFAULT_UNIT.to_string(),
            min_quantity: 1,
            supplier_id,
            created_at: Utc::now(),
        }
    }
}

crate::impl_entity!(Product, "product", "products");

/// Payload of `POST /products`
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub unit: Option<String>,
    pub min_quantity: Option<u32>,
    pub supplier_id: Uuid,
}

impl ValidatableEntity for NewProduct {
    fn validation_config() -> EntityValidationConfig {
        EntityValidationConfig::new()
            .filter("name", filters::trim())
            .validate("name", validators::required())
            .validate("name", validators::max_length(200))
            .filter("description", filters::trim())
            .filter("price", filters::round_decimals(2))
            .validate("price", validators::required())
            .validate("price", validators::positive())
            .validate("price", validators::max_value(MAX_UNIT_PRICE))
            .filter("unit", filters::trim())
            .filter("unit", filters::lowercase())
            .validate("unit", validators::max_length(50))
            .validate("min_quantity", validators::positive_integer())
            .validate("supplier_id", validators::required())
            .validate("supplier_id", validators::format(FieldFormat::Uuid))
    }
}

impl NewProduct {
    pub fn into_product(self) -> Product {
        Product {
            description: self.description.filter(|d| !d.is_empty()),
            unit: self
                .unit
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            min_quantity: self.min_quantity.unwrap_or(1),
            ..Product::new(self.name, self.price, self.supplier_id)
        }
    }
}

/// Product as listed by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub unit: String,
    pub min_quantity: u32,
    pub supplier_id: Uuid,
    pub supplier_name: String,
}

impl ProductView {
    pub fn new(product: &Product, supplier_name: &str) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            unit: product.unit.clone(),
            min_quantity: product.min_quantity,
            supplier_id: product.supplier_id,
            supplier_name: supplier_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::Validated;
    use serde_json::json;

    #[test]
    fn test_defaults_apply() {
        let payload = json!({
            "name": "  Whole Milk ",
            "price": 3.25,
            "supplier_id": Uuid::new_v4(),
        });
        let Validated(input) = Validated::<NewProduct>::from_value(payload).unwrap();
        let product = input.into_product();
        assert_eq!(product.name, "Whole Milk");
        assert_eq!(product.unit, "piece");
        assert_eq!(product.min_quantity, 1);
    }

    #[test]
    fn test_price_is_rounded_to_cents() {
        let payload = json!({
            "name": "Bell Peppers",
            "price": 3.999,
            "unit": "KG",
            "min_quantity": 3,
            "supplier_id": Uuid::new_v4(),
        });
        let Validated(input) = Validated::<NewProduct>::from_value(payload).unwrap();
        assert_eq!(input.price, 4.0);
        assert_eq!(input.unit.as_deref(), Some("kg"));
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        let payload = json!({"name": "Free Lunch", "price": 0, "supplier_id": Uuid::new_v4()});
        assert!(Validated::<NewProduct>::from_value(payload).is_err());
    }

    #[test]
    fn test_price_above_cap_is_rejected() {
        let payload = json!({"name": "Gold Leaf", "price": 1e308, "supplier_id": Uuid::new_v4()});
        let err = Validated::<NewProduct>::from_value(payload).err().unwrap();
        assert!(err.to_string().contains("at most"));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = Validated::<NewProduct>::from_value(json!({}))
            .err()
            .unwrap();
        let details = err.to_response().details.unwrap();
        let fields: Vec<&str> = details["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, ["name", "price", "supplier_id"]);
    }
}
