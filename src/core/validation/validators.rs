//! Reusable field validators
//!
//! A validator receives the field name and its (already filtered) JSON value.
//! Absent optional fields arrive as `null`; every validator except
//! [`required`] lets `null` through.

use crate::core::field::FieldFormat;
use serde_json::Value;

/// Validator: field must be present, non-null, and not an empty string
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Err(format!("'{}' is required", field)),
        Value::String(s) if s.trim().is_empty() => Err(format!("'{}' must not be empty", field)),
        _ => Ok(()),
    }
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        match value.as_f64() {
            Some(num) if num > 0.0 => Ok(()),
            Some(num) => Err(format!("'{}' must be positive (got {})", field, num)),
            None => Err(format!("'{}' must be a number", field)),
        }
    }
}

/// Validator: whole number between 1 and `u32::MAX`
pub fn positive_integer() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        match value.as_u64() {
            Some(n) if n >= 1 && n <= u64::from(u32::MAX) => Ok(()),
            _ => Err(format!("'{}' must be a positive integer", field)),
        }
    }
}

/// Validator: number must not exceed `max`
pub fn max_value(max: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        match value.as_f64() {
            Some(num) if num <= max => Ok(()),
            Some(num) => Err(format!("'{}' must be at most {} (got {})", field, max, num)),
            None => Err(format!("'{}' must be a number", field)),
        }
    }
}

/// Validator: number must lie within `[min, max]`
pub fn range(min: f64, max: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        match value.as_f64() {
            Some(num) if (min..=max).contains(&num) => Ok(()),
            Some(num) => Err(format!(
                "'{}' must be between {} and {} (got {})",
                field, min, max, num
            )),
            None => Err(format!("'{}' must be a number", field)),
        }
    }
}

/// Validator: string must not exceed `max` characters
pub fn max_length(max: usize) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| match value {
        Value::Null => Ok(()),
        Value::String(s) if s.chars().count() <= max => Ok(()),
        Value::String(_) => Err(format!("'{}' must be at most {} characters", field, max)),
        _ => Err(format!("'{}' must be a string", field)),
    }
}

/// Validator: value must be one of the allowed strings
pub fn in_list(
    allowed: &'static [&'static str],
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| match value {
        Value::Null => Ok(()),
        Value::String(s) if allowed.contains(&s.as_str()) => Ok(()),
        other => Err(format!(
            "'{}' must be one of {:?} (got {})",
            field, allowed, other
        )),
    }
}

/// Validator: string must match a [`FieldFormat`]
pub fn format(format: FieldFormat) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| match value {
        Value::Null => Ok(()),
        Value::String(s) if format.validate(s) => Ok(()),
        _ => Err(format!("'{}' must be {}", field, format.description())),
    }
}

/// Validator: string must be an RFC 3339 timestamp
pub fn rfc3339() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Ok(()),
        Value::String(s) if chrono::DateTime::parse_from_rfc3339(s).is_ok() => Ok(()),
        _ => Err(format!(
            "'{}' must be an RFC 3339 timestamp (e.g. 2026-01-31T18:00:00Z)",
            field
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === required() ===

    #[test]
    fn test_required_null_value_returns_error() {
        let v = required();
        let result = v("quantity", &json!(null));
        assert!(result.unwrap_err().contains("required"));
    }

    #[test]
    fn test_required_blank_string_returns_error() {
        let v = required();
        assert!(v("name", &json!("   ")).is_err());
    }

    #[test]
    fn test_required_number_value_returns_ok() {
        let v = required();
        assert!(v("quantity", &json!(0)).is_ok());
    }

    // === positive() ===

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        let v = positive();
        assert!(v("price", &json!(0.0)).is_err());
        assert!(v("price", &json!(-2.5)).is_err());
        assert!(v("price", &json!(2.25)).is_ok());
    }

    #[test]
    fn test_positive_rejects_non_numbers() {
        let v = positive();
        assert!(v("price", &json!("cheap")).unwrap_err().contains("number"));
    }

    // === positive_integer() ===

    #[test]
    fn test_positive_integer_accepts_whole_numbers() {
        let v = positive_integer();
        assert!(v("quantity", &json!(15)).is_ok());
        assert!(v("quantity", &json!(null)).is_ok());
    }

    #[test]
    fn test_positive_integer_rejects_fractions_zero_and_negatives() {
        let v = positive_integer();
        assert!(v("quantity", &json!(0)).is_err());
        assert!(v("quantity", &json!(-3)).is_err());
        assert!(v("quantity", &json!(2.5)).is_err());
        assert!(v("quantity", &json!("10")).is_err());
        assert!(v("quantity", &json!(u64::from(u32::MAX) + 1)).is_err());
    }

    // === max_value() ===

    #[test]
    fn test_max_value_caps_numbers() {
        let v = max_value(1_000_000.0);
        assert!(v("price", &json!(1_000_000)).is_ok());
        assert!(v("price", &json!(null)).is_ok());
        assert!(v("price", &json!(1e300)).unwrap_err().contains("at most"));
    }

    // === range() ===

    #[test]
    fn test_range_bounds_are_inclusive() {
        let v = range(1.0, 5.0);
        assert!(v("rating", &json!(1)).is_ok());
        assert!(v("rating", &json!(5)).is_ok());
        assert!(v("rating", &json!(6)).is_err());
        assert!(v("rating", &json!(0)).is_err());
    }

    // === max_length() ===

    #[test]
    fn test_max_length_counts_characters() {
        let v = max_length(5);
        assert!(v("unit", &json!("litre")).is_ok());
        assert!(v("unit", &json!("litres")).is_err());
        assert!(v("unit", &json!(12)).is_err());
    }

    // === in_list() ===

    #[test]
    fn test_in_list() {
        let v = in_list(&["vendor", "supplier"]);
        assert!(v("role", &json!("vendor")).is_ok());
        assert!(v("role", &json!("admin")).is_err());
        assert!(v("role", &json!(null)).is_ok());
    }

    // === format() ===

    #[test]
    fn test_format_email() {
        let v = format(FieldFormat::Email);
        assert!(v("email", &json!("vendor1@example.com")).is_ok());
        assert!(v("email", &json!("nope")).is_err());
    }

    #[test]
    fn test_format_uuid() {
        let v = format(FieldFormat::Uuid);
        assert!(v("group_id", &json!(uuid::Uuid::new_v4().to_string())).is_ok());
        let err = v("group_id", &json!(7)).unwrap_err();
        assert!(err.contains("UUID"));
    }

    // === rfc3339() ===

    #[test]
    fn test_rfc3339() {
        let v = rfc3339();
        assert!(v("deadline", &json!("2026-01-31T18:00:00Z")).is_ok());
        assert!(v("deadline", &json!("2026-01-31T18:00:00+02:00")).is_ok());
        assert!(v("deadline", &json!("next friday")).is_err());
    }
}
