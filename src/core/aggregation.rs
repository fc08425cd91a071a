//! Group lifecycle and order aggregation
//!
//! A group's status is a pure function of its accumulated quantity, its
//! target and its deadline at a given instant:
//!
//! ```text
//!   current >= target                 -> completed
//!   deadline <= now (target unmet)    -> expired
//!   otherwise                         -> active
//! ```
//!
//! [`record_order`] is the only operation that mutates a group after
//! creation. Callers run it inside the write transaction that inserts the
//! order so both writes commit or roll back together.

use crate::core::error::EntityError;
use crate::entities::group::Group;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a group order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Active,
    Completed,
    Expired,
}

impl GroupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStatus::Active => "active",
            GroupStatus::Completed => "completed",
            GroupStatus::Expired => "expired",
        }
    }

    /// Whether the group still accepts orders
    pub fn is_open(&self) -> bool {
        matches!(self, GroupStatus::Active)
    }

    /// Evaluate the status from quantities and deadline at `now`
    pub fn evaluate(
        current_quantity: u32,
        target_quantity: u32,
        deadline: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        if current_quantity >= target_quantity {
            GroupStatus::Completed
        } else if deadline.is_some_and(|d| d <= now) {
            GroupStatus::Expired
        } else {
            GroupStatus::Active
        }
    }
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(GroupStatus::Active),
            "completed" => Ok(GroupStatus::Completed),
            "expired" => Ok(GroupStatus::Expired),
            other => Err(format!("unknown group status '{}'", other)),
        }
    }
}

/// Units the group can still absorb before reaching its target
pub fn remaining_capacity(group: &Group) -> u32 {
    group.target_quantity.saturating_sub(group.current_quantity)
}

/// Status of the group as seen at `now`
pub fn effective_status(group: &Group, now: DateTime<Utc>) -> GroupStatus {
    GroupStatus::evaluate(
        group.current_quantity,
        group.target_quantity,
        group.deadline,
        now,
    )
}

/// Fold an order's quantity into its group.
///
/// Rejects orders against groups that are not active at `now` and orders
/// that would overshoot the target. On success the group's stored status is
/// recomputed and returned. On error the group is left untouched.
pub fn record_order(
    group: &mut Group,
    quantity: u32,
    now: DateTime<Utc>,
) -> Result<GroupStatus, EntityError> {
    let status = effective_status(group, now);
    if !status.is_open() {
        return Err(EntityError::GroupClosed {
            group_id: group.id,
            status,
        });
    }

    let remaining = remaining_capacity(group);
    if quantity > remaining {
        return Err(EntityError::CapacityExceeded {
            group_id: group.id,
            requested: quantity,
            remaining,
        });
    }

    group.current_quantity += quantity;
    group.status = effective_status(group, now);
    Ok(group.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn group(target: u32, current: u32, deadline: Option<DateTime<Utc>>) -> Group {
        Group {
            id: Uuid::new_v4(),
            name: "Tomato Bulk Buy".to_string(),
            description: None,
            target_quantity: target,
            current_quantity: current,
            price_per_unit: 2.25,
            deadline,
            status: GroupStatus::Active,
            product_id: Uuid::new_v4(),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_orders_accumulate() {
        let now = Utc::now();
        let mut g = group(50, 0, None);

        assert_eq!(record_order(&mut g, 15, now).unwrap(), GroupStatus::Active);
        assert_eq!(record_order(&mut g, 10, now).unwrap(), GroupStatus::Active);
        assert_eq!(g.current_quantity, 25);
        assert_eq!(remaining_capacity(&g), 25);
    }

    #[test]
    fn test_filling_target_completes_group() {
        let now = Utc::now();
        let mut g = group(20, 12, None);

        let status = record_order(&mut g, 8, now).unwrap();
        assert_eq!(status, GroupStatus::Completed);
        assert_eq!(g.status, GroupStatus::Completed);
        assert_eq!(g.current_quantity, 20);
    }

    #[test]
    fn test_overflow_is_rejected_without_mutation() {
        let now = Utc::now();
        let mut g = group(20, 15, None);

        let err = record_order(&mut g, 6, now).unwrap_err();
        assert!(matches!(
            err,
            EntityError::CapacityExceeded {
                requested: 6,
                remaining: 5,
                ..
            }
        ));
        assert_eq!(g.current_quantity, 15);
        assert_eq!(g.status, GroupStatus::Active);
    }

    #[test]
    fn test_completed_group_is_closed() {
        let now = Utc::now();
        let mut g = group(10, 10, None);
        g.status = GroupStatus::Completed;

        let err = record_order(&mut g, 1, now).unwrap_err();
        assert!(matches!(
            err,
            EntityError::GroupClosed {
                status: GroupStatus::Completed,
                ..
            }
        ));
    }

    #[test]
    fn test_past_deadline_is_closed() {
        let now = Utc::now();
        let mut g = group(10, 2, Some(now - Duration::hours(1)));

        let err = record_order(&mut g, 1, now).unwrap_err();
        assert!(matches!(
            err,
            EntityError::GroupClosed {
                status: GroupStatus::Expired,
                ..
            }
        ));
        assert_eq!(g.current_quantity, 2);
    }

    #[test]
    fn test_evaluate_prefers_completed_over_expired() {
        let now = Utc::now();
        let past = Some(now - Duration::days(1));
        assert_eq!(
            GroupStatus::evaluate(10, 10, past, now),
            GroupStatus::Completed
        );
        assert_eq!(GroupStatus::evaluate(9, 10, past, now), GroupStatus::Expired);
        assert_eq!(
            GroupStatus::evaluate(9, 10, Some(now + Duration::days(1)), now),
            GroupStatus::Active
        );
        assert_eq!(GroupStatus::evaluate(0, 10, None, now), GroupStatus::Active);
    }

    #[test]
    fn test_deadline_boundary_is_expired() {
        let now = Utc::now();
        assert_eq!(
            GroupStatus::evaluate(0, 10, Some(now), now),
            GroupStatus::Expired
        );
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            GroupStatus::Active,
            GroupStatus::Completed,
            GroupStatus::Expired,
        ] {
            assert_eq!(status.as_str().parse::<GroupStatus>().unwrap(), status);
        }
        assert!("cancelled".parse::<GroupStatus>().is_err());
    }
}
