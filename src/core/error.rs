//! Typed error handling for the marketplace
//!
//! Handlers and services return [`MarketError`], which maps every failure to
//! an HTTP status and a stable error code so clients can react to specific
//! cases instead of parsing messages.
//!
//! # Error Categories
//!
//! - [`EntityError`]: missing references and domain conflicts
//! - [`ValidationError`]: malformed or missing input
//! - [`StorageError`]: failures of the underlying store
//!
//! # Example
//!
//! ```rust,ignore
//! match service.place_order(input).await {
//!     Ok(placed) => println!("group now at {}", placed.group.current_quantity),
//!     Err(MarketError::Entity(EntityError::CapacityExceeded { remaining, .. })) => {
//!         println!("only {} units left", remaining);
//!     }
//!     Err(e) => eprintln!("order rejected: {}", e),
//! }
//! ```

use crate::core::aggregation::GroupStatus;
use crate::core::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for marketplace operations
#[derive(Debug)]
pub enum MarketError {
    /// Missing references and domain conflicts
    Entity(EntityError),

    /// Input validation errors
    Validation(ValidationError),

    /// Storage backend errors
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketError::Entity(e) => write!(f, "{}", e),
            MarketError::Validation(e) => write!(f, "{}", e),
            MarketError::Storage(e) => write!(f, "{}", e),
            MarketError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for MarketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarketError::Entity(e) => Some(e),
            MarketError::Validation(e) => Some(e),
            MarketError::Storage(e) => Some(e),
            MarketError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl MarketError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MarketError::Entity(e) => e.status_code(),
            MarketError::Validation(_) => StatusCode::BAD_REQUEST,
            MarketError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MarketError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MarketError::Entity(e) => e.error_code(),
            MarketError::Validation(_) => "VALIDATION_ERROR",
            MarketError::Storage(_) => "STORAGE_ERROR",
            MarketError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            MarketError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id.to_string()
                }))
            }
            MarketError::Entity(EntityError::EmailTaken { entity_type, email }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "email": email
                }))
            }
            MarketError::Entity(EntityError::GroupClosed { group_id, status }) => {
                Some(serde_json::json!({
                    "group_id": group_id.to_string(),
                    "status": status
                }))
            }
            MarketError::Entity(EntityError::CapacityExceeded {
                group_id,
                requested,
                remaining,
            }) => Some(serde_json::json!({
                "group_id": group_id.to_string(),
                "requested": requested,
                "remaining": remaining
            })),
            MarketError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            MarketError::Validation(ValidationError::FieldError { field, message }) => {
                Some(serde_json::json!({
                    "fields": [{ "field": field, "message": message }]
                }))
            }
            _ => None,
        }
    }

    /// Shorthand for a missing referenced record
    pub fn not_found(entity_type: &str, id: Uuid) -> Self {
        MarketError::Entity(EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        })
    }

    /// Shorthand for a single-field validation failure
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        MarketError::Validation(ValidationError::FieldError {
            field: field.to_string(),
            message: message.into(),
        })
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors about referenced records and domain rules
#[derive(Debug)]
pub enum EntityError {
    /// Referenced record does not exist
    NotFound { entity_type: String, id: Uuid },

    /// Another record of the same role already uses this email
    EmailTaken { entity_type: String, email: String },

    /// Group no longer accepts orders
    GroupClosed { group_id: Uuid, status: GroupStatus },

    /// Order would push the group past its target quantity
    CapacityExceeded {
        group_id: Uuid,
        requested: u32,
        remaining: u32,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
            EntityError::EmailTaken { entity_type, email } => {
                write!(f, "{} with email '{}' already exists", entity_type, email)
            }
            EntityError::GroupClosed { group_id, status } => {
                write!(
                    f,
                    "group '{}' is {} and no longer accepts orders",
                    group_id, status
                )
            }
            EntityError::CapacityExceeded {
                group_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "group '{}' has {} units left, cannot take {}",
                    group_id, remaining, requested
                )
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::EmailTaken { .. } => StatusCode::CONFLICT,
            EntityError::GroupClosed { .. } => StatusCode::CONFLICT,
            EntityError::CapacityExceeded { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::EmailTaken { .. } => "EMAIL_TAKEN",
            EntityError::GroupClosed { .. } => "GROUP_CLOSED",
            EntityError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
        }
    }
}

impl From<EntityError> for MarketError {
    fn from(err: EntityError) -> Self {
        MarketError::Entity(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON body
    InvalidJson { message: String },

    /// Query string that does not fit the expected filters
    InvalidQuery { message: String },

    /// Invalid UUID format
    InvalidUuid { field: String, value: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
            ValidationError::InvalidQuery { message } => {
                write!(f, "Invalid query: {}", message)
            }
            ValidationError::InvalidUuid { field, value } => {
                write!(f, "Invalid UUID for '{}': {}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for MarketError {
    fn from(err: ValidationError) -> Self {
        MarketError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors surfaced by the storage backend
#[derive(Debug)]
pub enum StorageError {
    /// Transaction could not be opened or committed
    TransactionError { message: String },

    /// Data integrity error the service did not anticipate
    IntegrityError { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::TransactionError { message } => {
                write!(f, "Transaction error: {}", message)
            }
            StorageError::IntegrityError { message } => {
                write!(f, "Data integrity error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for MarketError {
    fn from(err: StorageError) -> Self {
        MarketError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<StoreError> for MarketError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation {
                entity_type,
                value,
                ..
            } => MarketError::Entity(EntityError::EmailTaken {
                entity_type: entity_type.to_string(),
                email: value,
            }),
            StoreError::ForeignKeyViolation { target, id, .. } => {
                MarketError::not_found(target, id)
            }
            StoreError::Closed => MarketError::Storage(StorageError::TransactionError {
                message: err.to_string(),
            }),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for marketplace operations
pub type MarketResult<T> = Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_display() {
        let err = EntityError::NotFound {
            entity_type: "group".to_string(),
            id: Uuid::nil(),
        };
        assert!(err.to_string().contains("group"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_conflicts_map_to_409() {
        let closed = EntityError::GroupClosed {
            group_id: Uuid::nil(),
            status: GroupStatus::Expired,
        };
        assert_eq!(closed.status_code(), StatusCode::CONFLICT);
        assert!(closed.to_string().contains("expired"));

        let full = EntityError::CapacityExceeded {
            group_id: Uuid::nil(),
            requested: 10,
            remaining: 4,
        };
        assert_eq!(full.status_code(), StatusCode::CONFLICT);
        assert_eq!(full.error_code(), "CAPACITY_EXCEEDED");
    }

    #[test]
    fn test_capacity_details_carry_remaining() {
        let err: MarketError = EntityError::CapacityExceeded {
            group_id: Uuid::nil(),
            requested: 10,
            remaining: 4,
        }
        .into();
        let response = err.to_response();
        let details = response.details.unwrap();
        assert_eq!(details["remaining"], 4);
        assert_eq!(details["requested"], 10);
    }

    #[test]
    fn test_single_field_error_lists_field() {
        let err = MarketError::invalid_field("quantity", "is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let details = err.to_response().details.unwrap();
        assert_eq!(details["fields"][0]["field"], "quantity");
    }

    #[test]
    fn test_store_unique_violation_becomes_email_taken() {
        let err: MarketError = StoreError::UniqueViolation {
            entity_type: "vendor",
            field: "email",
            value: "a@b.co".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "EMAIL_TAKEN");
    }

    #[test]
    fn test_store_foreign_key_violation_becomes_not_found() {
        let err: MarketError = StoreError::ForeignKeyViolation {
            entity_type: "order",
            field: "group_id",
            target: "group",
            id: Uuid::nil(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MarketError = json_err.into();
        assert!(matches!(
            err,
            MarketError::Validation(ValidationError::InvalidJson { .. })
        ));
    }
}
