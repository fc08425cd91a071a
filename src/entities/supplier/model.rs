//! Supplier entity model and projection

use crate::core::entity::Actor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seller-side actor who lists products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    /// Unique among suppliers, stored lowercase
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Supplier {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone: None,
            location: None,
            latitude: None,
            longitude: None,
            description: None,
            created_at: Utc::now(),
        }
    }
}

crate::impl_entity!(Supplier, "supplier", "suppliers");
crate::impl_actor!(Supplier);

/// Supplier as listed by `GET /suppliers`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&Supplier> for SupplierView {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name.clone(),
            email: supplier.email().to_string(),
            location: supplier.location.clone(),
            description: supplier.description.clone(),
            latitude: supplier.latitude,
            longitude: supplier.longitude,
        }
    }
}
