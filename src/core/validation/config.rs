//! Per-entity validation rules

use crate::core::error::FieldValidationError;
use serde_json::{Map, Value};
use std::sync::Arc;

type FilterFn = Arc<dyn Fn(&str, Value) -> Value + Send + Sync>;
type ValidatorFn = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

#[derive(Clone)]
struct FieldRules {
    field: &'static str,
    filters: Vec<FilterFn>,
    validators: Vec<ValidatorFn>,
}

/// Ordered filters and validators for the fields of one request payload
///
/// ```rust,ignore
/// EntityValidationConfig::new()
///     .filter("email", filters::trim())
///     .filter("email", filters::lowercase())
///     .validate("email", validators::required())
///     .validate("email", validators::format(FieldFormat::Email))
/// ```
#[derive(Clone, Default)]
pub struct EntityValidationConfig {
    fields: Vec<FieldRules>,
}

impl EntityValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter for `field`; filters run in declaration order
    pub fn filter(
        mut self,
        field: &'static str,
        filter: impl Fn(&str, Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.rules_mut(field).filters.push(Arc::new(filter));
        self
    }

    /// Append a validator for `field`; the first failing validator wins
    pub fn validate(
        mut self,
        field: &'static str,
        validator: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.rules_mut(field).validators.push(Arc::new(validator));
        self
    }

    fn rules_mut(&mut self, field: &'static str) -> &mut FieldRules {
        let index = match self.fields.iter().position(|rules| rules.field == field) {
            Some(index) => index,
            None => {
                self.fields.push(FieldRules {
                    field,
                    filters: Vec::new(),
                    validators: Vec::new(),
                });
                self.fields.len() - 1
            }
        };
        &mut self.fields[index]
    }

    /// Filter then validate a JSON object payload.
    ///
    /// Returns the filtered payload, or one error per failing field.
    pub fn validate_and_filter(&self, payload: Value) -> Result<Value, Vec<FieldValidationError>> {
        let Value::Object(mut object) = payload else {
            return Err(vec![FieldValidationError {
                field: "body".to_string(),
                message: "expected a JSON object".to_string(),
            }]);
        };

        let mut errors = Vec::new();
        for rules in &self.fields {
            let value = apply_filters(rules, &mut object);
            if let Some(message) = rules
                .validators
                .iter()
                .find_map(|validator| validator(rules.field, &value).err())
            {
                errors.push(FieldValidationError {
                    field: rules.field.to_string(),
                    message,
                });
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(object))
        } else {
            Err(errors)
        }
    }
}

fn apply_filters(rules: &FieldRules, object: &mut Map<String, Value>) -> Value {
    match object.remove(rules.field) {
        None | Some(Value::Null) => Value::Null,
        Some(mut value) => {
            for filter in &rules.filters {
                value = filter(rules.field, value);
            }
            object.insert(rules.field.to_string(), value.clone());
            value
        }
    }
}
