//! Market service shared by every resource
//!
//! `MarketService` owns the injected store handle and the group policy. The
//! operations themselves live next to their resources
//! (`entities::*::service`) as further `impl MarketService` blocks; this
//! module only provides the transaction plumbing they share.

use crate::core::entity::Entity;
use crate::core::error::{MarketError, MarketResult};
use crate::core::store::{MarketStore, ReadTx, Table, WriteTx};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Rules applied when a group is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupPolicy {
    /// Deadline assigned to groups created without one, in days from creation
    pub default_deadline_days: Option<u32>,
}

impl GroupPolicy {
    /// Deadline for a new group: the requested one, else the policy default.
    ///
    /// Fails when the default pushes the deadline past the representable
    /// date range.
    pub fn deadline_for(
        &self,
        requested: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> MarketResult<Option<DateTime<Utc>>> {
        if requested.is_some() {
            return Ok(requested);
        }
        let Some(days) = self.default_deadline_days else {
            return Ok(None);
        };
        Duration::try_days(i64::from(days))
            .and_then(|offset| now.checked_add_signed(offset))
            .map(Some)
            .ok_or_else(|| {
                MarketError::Internal(format!(
                    "default group deadline of {} days is out of range",
                    days
                ))
            })
    }
}

/// Entry point for every marketplace operation
#[derive(Clone)]
pub struct MarketService {
    store: Arc<dyn MarketStore>,
    group_policy: GroupPolicy,
}

impl MarketService {
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self {
            store,
            group_policy: GroupPolicy::default(),
        }
    }

    pub fn with_group_policy(mut self, group_policy: GroupPolicy) -> Self {
        self.group_policy = group_policy;
        self
    }

    /// The injected store handle
    pub fn store(&self) -> &Arc<dyn MarketStore> {
        &self.store
    }

    pub fn group_policy(&self) -> GroupPolicy {
        self.group_policy
    }

    pub(crate) async fn read(&self) -> MarketResult<Box<dyn ReadTx>> {
        Ok(self.store.read().await?)
    }

    pub(crate) async fn write(&self) -> MarketResult<Box<dyn WriteTx>> {
        Ok(self.store.write().await?)
    }
}

/// Look up a referenced record or fail with a structured NotFound
pub(crate) fn require<T: Entity>(table: &Table<T>, id: Uuid) -> MarketResult<&T> {
    table
        .get(&id)
        .ok_or_else(|| MarketError::not_found(T::resource_name_singular(), id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_deadline_wins() {
        let now = Utc::now();
        let requested = now + Duration::hours(6);
        let policy = GroupPolicy {
            default_deadline_days: Some(3),
        };
        assert_eq!(
            policy.deadline_for(Some(requested), now).unwrap(),
            Some(requested)
        );
    }

    #[test]
    fn test_default_deadline_applies_when_configured() {
        let now = Utc::now();
        let policy = GroupPolicy {
            default_deadline_days: Some(3),
        };
        assert_eq!(
            policy.deadline_for(None, now).unwrap(),
            Some(now + Duration::days(3))
        );
        assert_eq!(GroupPolicy::default().deadline_for(None, now).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_default_deadline_is_an_error() {
        let policy = GroupPolicy {
            default_deadline_days: Some(u32::MAX),
        };
        let err = policy.deadline_for(None, Utc::now()).unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(err.to_string().contains("out of range"));

        // An explicit deadline never consults the default
        let requested = Utc::now() + Duration::days(1);
        assert_eq!(
            policy.deadline_for(Some(requested), Utc::now()).unwrap(),
            Some(requested)
        );
    }
}
