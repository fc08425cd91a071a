//! Order HTTP handlers

use super::model::{GroupOrders, NewOrder, OrderView, PlacedOrder};
use crate::core::error::MarketResult;
use crate::core::query::{Filter, OrderQuery, parse_id};
use crate::core::service::MarketService;
use crate::core::validation::Validated;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

pub async fn list_orders(
    State(service): State<MarketService>,
    Filter(query): Filter<OrderQuery>,
) -> MarketResult<Json<Vec<OrderView>>> {
    let vendor_id = query.vendor_id()?;
    service.list_orders(vendor_id).await.map(Json)
}

pub async fn list_group_orders(
    State(service): State<MarketService>,
    Path(id): Path<String>,
) -> MarketResult<Json<GroupOrders>> {
    let id = parse_id("id", &id)?;
    service.group_orders(id).await.map(Json)
}

pub async fn create_order(
    State(service): State<MarketService>,
    Validated(input): Validated<NewOrder>,
) -> MarketResult<(StatusCode, Json<PlacedOrder>)> {
    let placed = service.place_order(input).await?;
    Ok((StatusCode::CREATED, Json(placed)))
}
