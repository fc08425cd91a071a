//! Field format checks used by the validators

use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

/// Formats a string field can be required to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Uuid,
}

impl FieldFormat {
    /// Check a string against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Uuid => Uuid::parse_str(value).is_ok(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FieldFormat::Email => "an email address",
            FieldFormat::Uuid => "a UUID",
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("email pattern is valid")
        });
        regex.is_match(email)
    }
}
