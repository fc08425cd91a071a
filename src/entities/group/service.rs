//! Group listing and creation

use super::model::{Group, GroupView, NewGroup};
use crate::core::aggregation::GroupStatus;
use crate::core::error::MarketResult;
use crate::core::service::{MarketService, require};
use crate::core::store::{Record, Tables};
use chrono::{DateTime, Utc};
use uuid::Uuid;

fn project(tables: &Tables, group: &Group, now: DateTime<Utc>) -> GroupView {
    let product_name = tables
        .products
        .get(&group.product_id)
        .map(|product| product.name.as_str())
        .unwrap_or_default();
    let creator_name = tables
        .vendors
        .get(&group.created_by)
        .map(|vendor| vendor.name.as_str())
        .unwrap_or_default();
    GroupView::new(group, product_name, creator_name, now)
}

impl MarketService {
    /// Groups in creation order with their status evaluated now
    ///
    /// A `status` filter matches that evaluated status, not the stored one.
    pub async fn list_groups(&self, status: Option<GroupStatus>) -> MarketResult<Vec<GroupView>> {
        let now = Utc::now();
        let tx = self.read().await?;
        let tables = tx.tables();

        let groups: Vec<GroupView> = tables
            .groups
            .iter()
            .map(|group| project(tables, group, now))
            .filter(|view| status.is_none_or(|wanted| view.status == wanted))
            .collect();

        tracing::debug!(count = groups.len(), status = ?status, "listed groups");
        Ok(groups)
    }

    pub async fn get_group(&self, id: Uuid) -> MarketResult<GroupView> {
        let tx = self.read().await?;
        let tables = tx.tables();
        let group = require(&tables.groups, id)?;
        Ok(project(tables, group, Utc::now()))
    }

    /// Open a new group against a product
    ///
    /// Without an explicit deadline the group policy's default applies.
    pub async fn create_group(&self, input: NewGroup) -> MarketResult<Uuid> {
        let now = Utc::now();
        let mut tx = self.write().await?;
        require(&tx.tables().products, input.product_id)?;
        require(&tx.tables().vendors, input.created_by)?;

        let deadline = self.group_policy().deadline_for(input.deadline, now)?;
        let group = input.into_group(deadline, now);
        let id = group.id;
        let (product_id, target) = (group.product_id, group.target_quantity);
        tx.put(Record::from(group))?;
        tx.commit()?;

        tracing::info!(
            group_id = %id,
            product_id = %product_id,
            target_quantity = target,
            deadline = ?deadline,
            "group created"
        );
        Ok(id)
    }
}
