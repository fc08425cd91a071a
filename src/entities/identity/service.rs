//! Identity resolution
//!
//! Login is a lookup-or-create by email within the role's collection. It runs
//! inside one write transaction, so concurrent first logins with the same
//! email still create a single record.

use super::model::{Identity, Login, Role, Signup};
use crate::core::error::{EntityError, MarketResult};
use crate::core::service::MarketService;
use crate::core::store::{Record, Tables};
use crate::entities::{Supplier, Vendor};

fn find_identity(tables: &Tables, role: Role, email: &str) -> Option<Identity> {
    match role {
        Role::Vendor => tables
            .vendors
            .by_email(email)
            .map(|vendor| Identity::of(vendor, role)),
        Role::Supplier => tables
            .suppliers
            .by_email(email)
            .map(|supplier| Identity::of(supplier, role)),
    }
}

impl MarketService {
    /// Resolve an email to a vendor or supplier, creating it on first sight
    pub async fn resolve_identity(&self, login: Login) -> MarketResult<Identity> {
        let role = login.role();
        let mut tx = self.write().await?;

        if let Some(identity) = find_identity(tx.tables(), role, &login.email) {
            tracing::debug!(user_id = %identity.id, role = %role, "identity resolved");
            return Ok(identity);
        }

        let name = login
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| role.default_name().to_string());
        let (identity, record) = match role {
            Role::Vendor => {
                let vendor = Vendor::new(name, login.email);
                (Identity::of(&vendor, role), Record::from(vendor))
            }
            Role::Supplier => {
                let supplier = Supplier::new(name, login.email);
                (Identity::of(&supplier, role), Record::from(supplier))
            }
        };
        tx.put(record)?;
        tx.commit()?;

        tracing::info!(user_id = %identity.id, role = %role, "identity created on login");
        Ok(identity)
    }

    /// Register a new vendor or supplier with its full profile
    pub async fn register_identity(&self, signup: Signup) -> MarketResult<Identity> {
        let role = signup.role();
        let mut tx = self.write().await?;

        if find_identity(tx.tables(), role, &signup.email).is_some() {
            return Err(EntityError::EmailTaken {
                entity_type: role.to_string(),
                email: signup.email,
            }
            .into());
        }

        let (identity, record) = match role {
            Role::Vendor => {
                let vendor = signup.into_vendor();
                (Identity::of(&vendor, role), Record::from(vendor))
            }
            Role::Supplier => {
                let supplier = signup.into_supplier();
                (Identity::of(&supplier, role), Record::from(supplier))
            }
        };
        tx.put(record)?;
        tx.commit()?;

        tracing::info!(user_id = %identity.id, role = %role, "identity registered");
        Ok(identity)
    }
}
