//! Identity HTTP handlers
//!
//! These endpoints are unauthenticated: an email alone resolves an identity.

use super::model::{IdentityResponse, Login, Signup};
use crate::core::error::MarketResult;
use crate::core::service::MarketService;
use crate::core::validation::Validated;
use axum::{extract::State, http::StatusCode, response::Json};

pub async fn login(
    State(service): State<MarketService>,
    Validated(input): Validated<Login>,
) -> MarketResult<Json<IdentityResponse>> {
    let identity = service.resolve_identity(input).await?;
    Ok(Json(identity.into()))
}

pub async fn signup(
    State(service): State<MarketService>,
    Validated(input): Validated<Signup>,
) -> MarketResult<(StatusCode, Json<IdentityResponse>)> {
    let identity = service.register_identity(input).await?;
    Ok((StatusCode::CREATED, Json(identity.into())))
}
