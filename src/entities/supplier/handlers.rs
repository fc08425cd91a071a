//! Supplier HTTP handlers

use super::model::SupplierView;
use crate::core::error::MarketResult;
use crate::core::query::parse_id;
use crate::core::service::MarketService;
use crate::core::validation::Validated;
use crate::entities::Created;
use crate::entities::review::{NewReview, SupplierReviews};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

pub async fn list_suppliers(
    State(service): State<MarketService>,
) -> MarketResult<Json<Vec<SupplierView>>> {
    service.list_suppliers().await.map(Json)
}

pub async fn submit_review(
    State(service): State<MarketService>,
    Validated(input): Validated<NewReview>,
) -> MarketResult<(StatusCode, Json<Created>)> {
    let id = service.submit_review(input).await?;
    Ok((StatusCode::CREATED, Json(Created::new(id))))
}

pub async fn list_supplier_reviews(
    State(service): State<MarketService>,
    Path(id): Path<String>,
) -> MarketResult<Json<SupplierReviews>> {
    let supplier_id = parse_id("id", &id)?;
    service.supplier_reviews(supplier_id).await.map(Json)
}
