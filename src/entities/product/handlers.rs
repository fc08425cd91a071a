//! Product HTTP handlers

use super::model::{NewProduct, ProductView};
use crate::core::error::MarketResult;
use crate::core::query::{Filter, ProductQuery, parse_id};
use crate::core::service::MarketService;
use crate::core::validation::Validated;
use crate::entities::Created;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

pub async fn list_products(
    State(service): State<MarketService>,
    Filter(query): Filter<ProductQuery>,
) -> MarketResult<Json<Vec<ProductView>>> {
    let supplier_id = query.supplier_id()?;
    service.list_products(supplier_id).await.map(Json)
}

pub async fn get_product(
    State(service): State<MarketService>,
    Path(id): Path<String>,
) -> MarketResult<Json<ProductView>> {
    let id = parse_id("id", &id)?;
    service.get_product(id).await.map(Json)
}

pub async fn create_product(
    State(service): State<MarketService>,
    Validated(input): Validated<NewProduct>,
) -> MarketResult<(StatusCode, Json<Created>)> {
    let id = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(Created::new(id))))
}
