//! Query-string filters and path identifiers

use crate::core::aggregation::GroupStatus;
use crate::core::error::{MarketError, MarketResult, ValidationError};
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Query-string extractor that reports bad filters as a JSON validation error
///
/// ```rust,ignore
/// async fn list_products(Filter(query): Filter<ProductQuery>) -> MarketResult<...>
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter<T>(pub T);

impl<S, T> FromRequestParts<S> for Filter<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = MarketError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::InvalidQuery {
                message: rejection.body_text(),
            })?;
        Ok(Filter(value))
    }
}

/// Query parameters for `GET /products`
///
/// ```text
/// GET /api/products
/// GET /api/products?supplier_id=6f1c...
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    pub supplier_id: Option<String>,
}

impl ProductQuery {
    pub fn supplier_id(&self) -> MarketResult<Option<Uuid>> {
        parse_id_filter("supplier_id", self.supplier_id.as_deref())
    }
}

/// Query parameters for `GET /orders`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderQuery {
    pub vendor_id: Option<String>,
}

impl OrderQuery {
    pub fn vendor_id(&self) -> MarketResult<Option<Uuid>> {
        parse_id_filter("vendor_id", self.vendor_id.as_deref())
    }
}

/// Query parameters for `GET /groups`
///
/// ```text
/// GET /api/groups?status=active
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupQuery {
    pub status: Option<String>,
}

impl GroupQuery {
    /// Requested status; an empty value means "any"
    pub fn status(&self) -> MarketResult<Option<GroupStatus>> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .to_lowercase()
                .parse()
                .map(Some)
                .map_err(|message: String| MarketError::invalid_field("status", message)),
        }
    }
}

/// Parse an optional id filter; an empty value means "no filter"
pub fn parse_id_filter(field: &str, raw: Option<&str>) -> MarketResult<Option<Uuid>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id(field, value).map(Some),
    }
}

/// Parse an identifier taken from a path segment or query string
pub fn parse_id(field: &str, raw: &str) -> MarketResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        ValidationError::InvalidUuid {
            field: field.to_string(),
            value: raw.to_string(),
        }
        .into()
    })
}
