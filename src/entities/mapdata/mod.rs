//! Geographic listing of vendors and suppliers
//!
//! Only actors with both coordinates appear on the map.

pub mod descriptor;
pub mod handlers;

pub use descriptor::MapDataDescriptor;

use crate::core::entity::Actor;
use crate::core::error::MarketResult;
use crate::core::service::MarketService;
use crate::core::store::Table;
use crate::entities::identity::Role;
use serde::Serialize;
use uuid::Uuid;

/// One marker on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind: Role,
}

/// Response of `GET /mapdata`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    pub vendors: Vec<MapPoint>,
    pub suppliers: Vec<MapPoint>,
}

fn points<A: Actor>(table: &Table<A>, kind: Role) -> Vec<MapPoint> {
    table
        .iter()
        .filter_map(|actor| {
            actor.coordinates().map(|position| MapPoint {
                id: actor.id(),
                name: actor.name().to_string(),
                latitude: position.latitude,
                longitude: position.longitude,
                kind,
            })
        })
        .collect()
}

impl MarketService {
    pub async fn map_data(&self) -> MarketResult<MapData> {
        let tx = self.read().await?;
        let tables = tx.tables();

        Ok(MapData {
            vendors: points(&tables.vendors, Role::Vendor),
            suppliers: points(&tables.suppliers, Role::Supplier),
        })
    }
}
