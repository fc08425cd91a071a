//! Entity traits defining the core abstraction for all marketplace records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base trait for all records persisted by the marketplace.
///
/// Every entity has:
/// - id: Unique identifier
/// - created_at: Creation timestamp
///
/// Records are append-only through the public interface, so there is no
/// `updated_at`/`deleted_at` here. The only in-place mutation is the
/// aggregation of an order into its group.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "products", "groups")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "product", "group")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;
}

/// Geographic position of an actor on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Pair optional latitude/longitude columns; both must be present
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// Marketplace actors (vendors and suppliers) that carry an email identity
/// and may appear on the map.
pub trait Actor: Entity {
    /// Display name
    fn name(&self) -> &str;

    /// Unique (per collection) lowercase email
    fn email(&self) -> &str;

    /// Map position, if both coordinates are known
    fn coordinates(&self) -> Option<Coordinates>;
}
