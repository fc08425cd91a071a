//! Group HTTP handlers

use super::model::{GroupView, NewGroup};
use crate::core::error::MarketResult;
use crate::core::query::{Filter, GroupQuery, parse_id};
use crate::core::service::MarketService;
use crate::core::validation::Validated;
use crate::entities::Created;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

pub async fn list_groups(
    State(service): State<MarketService>,
    Filter(query): Filter<GroupQuery>,
) -> MarketResult<Json<Vec<GroupView>>> {
    let status = query.status()?;
    service.list_groups(status).await.map(Json)
}

pub async fn get_group(
    State(service): State<MarketService>,
    Path(id): Path<String>,
) -> MarketResult<Json<GroupView>> {
    let id = parse_id("id", &id)?;
    service.get_group(id).await.map(Json)
}

pub async fn create_group(
    State(service): State<MarketService>,
    Validated(input): Validated<NewGroup>,
) -> MarketResult<(StatusCode, Json<Created>)> {
    let id = service.create_group(input).await?;
    Ok((StatusCode::CREATED, Json(Created::new(id))))
}
