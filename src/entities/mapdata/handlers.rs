//! Map data HTTP handler

use super::MapData;
use crate::core::error::MarketResult;
use crate::core::service::MarketService;
use axum::{extract::State, response::Json};

pub async fn map_data(State(service): State<MarketService>) -> MarketResult<Json<MapData>> {
    service.map_data().await.map(Json)
}
