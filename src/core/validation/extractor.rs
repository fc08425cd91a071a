//! Axum extractor for validated request payloads
//!
//! `Validated<T>` parses the JSON body, runs `T`'s filters and validators on
//! it, and only then deserializes it into `T`. Handlers therefore receive
//! typed, normalized input or never run at all.

use super::config::EntityValidationConfig;
use crate::core::error::{MarketError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request payloads that declare their own validation rules
pub trait ValidatableEntity: DeserializeOwned {
    /// Filters and validators applied before deserialization
    fn validation_config() -> EntityValidationConfig;

    /// Checks that need the typed value (cross-field rules)
    fn check(&self) -> Result<(), MarketError> {
        Ok(())
    }
}

/// Axum extractor that validates and filters a JSON payload into `T`
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     State(state): State<AppState>,
///     Validated(input): Validated<NewOrder>,
/// ) -> MarketResult<impl IntoResponse> {
///     // input is already validated and typed
/// }
/// ```
pub struct Validated<T>(pub T);

impl<T: ValidatableEntity> Validated<T> {
    /// Run the full validation pipeline on an already parsed payload
    pub fn from_value(payload: Value) -> Result<Self, MarketError> {
        let filtered = T::validation_config()
            .validate_and_filter(payload)
            .map_err(ValidationError::FieldErrors)?;
        let value: T = serde_json::from_value(filtered)?;
        value.check()?;
        Ok(Validated(value))
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatableEntity + Send,
{
    type Rejection = MarketError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> =
            Json::from_request(req, state)
                .await
                .map_err(|rejection| ValidationError::InvalidJson {
                    message: rejection.body_text(),
                })?;

        Self::from_value(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validators;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Pallet {
        quantity: u32,
    }

    impl ValidatableEntity for Pallet {
        fn validation_config() -> EntityValidationConfig {
            EntityValidationConfig::new()
                .validate("quantity", validators::required())
                .validate("quantity", validators::positive_integer())
        }

        fn check(&self) -> Result<(), MarketError> {
            if self.quantity == 13 {
                return Err(MarketError::invalid_field("quantity", "unlucky"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_valid_payload_is_typed() {
        let Validated(parsed) = Validated::<Pallet>::from_value(json!({"quantity": 4})).unwrap();
        assert_eq!(parsed.quantity, 4);
    }

    #[test]
    fn test_missing_field_reports_field_errors() {
        let err = Validated::<Pallet>::from_value(json!({})).err().unwrap();
        assert!(matches!(
            err,
            MarketError::Validation(ValidationError::FieldErrors(ref errors)) if errors[0].field == "quantity"
        ));
    }

    #[test]
    fn test_cross_field_check_runs_last() {
        let err = Validated::<Pallet>::from_value(json!({"quantity": 13}))
            .err()
            .unwrap();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
