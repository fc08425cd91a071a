//! Reusable field filters
//!
//! These filters normalize field values before validation

use serde_json::{Value, json};

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

/// Filter: convert string to lowercase
pub fn lowercase() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        other => other,
    }
}

/// Filter: round number to specified decimal places
///
/// Numbers too large to scale are left as they are for the validators to
/// judge.
pub fn round_decimals(decimals: u32) -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    move |_: &str, value: Value| match value.as_f64() {
        Some(num) if !value.is_u64() && !value.is_i64() => {
            let factor = 10_f64.powi(decimals as i32);
            let scaled = (num * factor).round();
            if scaled.is_finite() {
                json!(scaled / factor)
            } else {
                value
            }
        }
        _ => value,
    }
}
