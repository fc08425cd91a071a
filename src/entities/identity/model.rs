//! Identity payloads: role, login, signup and the resolved user

use crate::core::entity::Actor;
use crate::core::error::{MarketError, MarketResult};
use crate::core::field::FieldFormat;
use crate::core::validation::{EntityValidationConfig, ValidatableEntity, filters, validators};
use crate::entities::{Supplier, Vendor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const ROLES: &[&str] = &["vendor", "supplier"];

/// Which collection an identity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Vendor,
    Supplier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Vendor => "vendor",
            Role::Supplier => "supplier",
        }
    }

    /// Name given to identities created by a login without a name
    pub fn default_name(&self) -> &'static str {
        match self {
            Role::Vendor => "New Vendor",
            Role::Supplier => "New Supplier",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn role_rules(config: EntityValidationConfig, field: &'static str) -> EntityValidationConfig {
    config
        .filter(field, filters::trim())
        .filter(field, filters::lowercase())
        .validate(field, validators::in_list(ROLES))
}

fn email_rules(config: EntityValidationConfig) -> EntityValidationConfig {
    config
        .filter("email", filters::trim())
        .filter("email", filters::lowercase())
        .validate("email", validators::required())
        .validate("email", validators::max_length(254))
        .validate("email", validators::format(FieldFormat::Email))
}

/// At most one of `role` and `user_type` may be sent
fn one_role(role: Option<Role>, user_type: Option<Role>) -> MarketResult<Option<Role>> {
    match (role, user_type) {
        (Some(_), Some(_)) => Err(MarketError::invalid_field(
            "role",
            "send either 'role' or 'user_type', not both",
        )),
        (role, user_type) => Ok(role.or(user_type)),
    }
}

/// Payload of `POST /login`
///
/// `role` may also be sent as `user_type` and defaults to `vendor`.
#[derive(Debug, Clone, Deserialize)]
pub struct Login {
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub user_type: Option<Role>,
    pub name: Option<String>,
}

impl Login {
    pub fn role(&self) -> Role {
        self.role.or(self.user_type).unwrap_or_default()
    }
}

impl ValidatableEntity for Login {
    fn validation_config() -> EntityValidationConfig {
        let config = email_rules(EntityValidationConfig::new());
        let config = role_rules(role_rules(config, "role"), "user_type");
        config
            .filter("name", filters::trim())
            .validate("name", validators::max_length(200))
    }

    fn check(&self) -> Result<(), MarketError> {
        one_role(self.role, self.user_type).map(|_| ())
    }
}

/// Payload of `POST /signup`
///
/// Exactly one of `role` and `user_type` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct Signup {
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub user_type: Option<Role>,
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Suppliers only
    pub description: Option<String>,
}

impl ValidatableEntity for Signup {
    fn validation_config() -> EntityValidationConfig {
        let config = email_rules(EntityValidationConfig::new());
        role_rules(role_rules(config, "role"), "user_type")
            .filter("name", filters::trim())
            .validate("name", validators::required())
            .validate("name", validators::max_length(200))
            .filter("phone", filters::trim())
            .validate("phone", validators::max_length(20))
            .filter("location", filters::trim())
            .validate("location", validators::max_length(200))
            .validate("latitude", validators::range(-90.0, 90.0))
            .validate("longitude", validators::range(-180.0, 180.0))
            .filter("description", filters::trim())
    }

    fn check(&self) -> Result<(), MarketError> {
        match one_role(self.role, self.user_type)? {
            Some(_) => Ok(()),
            None => Err(MarketError::invalid_field("role", "'role' is required")),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Signup {
    pub fn role(&self) -> Role {
        self.role.or(self.user_type).unwrap_or_default()
    }

    pub fn into_vendor(self) -> Vendor {
        Vendor {
            phone: non_empty(self.phone),
            location: non_empty(self.location),
            latitude: self.latitude,
            longitude: self.longitude,
            ..Vendor::new(self.name, self.email)
        }
    }

    pub fn into_supplier(self) -> Supplier {
        Supplier {
            phone: non_empty(self.phone),
            location: non_empty(self.location),
            latitude: self.latitude,
            longitude: self.longitude,
            description: non_empty(self.description),
            ..Supplier::new(self.name, self.email)
        }
    }
}

/// A resolved vendor or supplier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created: DateTime<Utc>,
}

impl Identity {
    pub fn of<A: Actor>(actor: &A, role: Role) -> Self {
        Self {
            id: actor.id(),
            name: actor.name().to_string(),
            email: actor.email().to_string(),
            role,
            created: actor.created_at(),
        }
    }
}

/// Response of `POST /login` and `POST /signup`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityResponse {
    pub success: bool,
    pub user: Identity,
}

impl From<Identity> for IdentityResponse {
    fn from(user: Identity) -> Self {
        Self {
            success: true,
            user,
        }
    }
}
