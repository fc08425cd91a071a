//! Order placement and listing
//!
//! Placing an order is the one write that touches two records: the order is
//! inserted and its group's running total is updated. Both happen in the same
//! write transaction, so the sum of a group's order quantities always equals
//! its `current_quantity`, also under concurrent placement.

use super::model::{GroupOrders, NewOrder, Order, OrderView, PlacedOrder, round_cents};
use crate::core::aggregation;
use crate::core::error::MarketResult;
use crate::core::service::{MarketService, require};
use crate::core::store::{Record, Tables};
use crate::entities::group::GroupSnapshot;
use chrono::Utc;
use uuid::Uuid;

fn project(tables: &Tables, order: &Order) -> OrderView {
    OrderView {
        id: order.id,
        quantity: order.quantity,
        total_price: order.total_price,
        status: order.status,
        group_id: order.group_id,
        group_name: tables
            .groups
            .get(&order.group_id)
            .map(|group| group.name.clone())
            .unwrap_or_default(),
        vendor_id: order.vendor_id,
        vendor_name: tables
            .vendors
            .get(&order.vendor_id)
            .map(|vendor| vendor.name.clone())
            .unwrap_or_default(),
        created_at: order.created_at,
    }
}

impl MarketService {
    /// Place an order and fold its quantity into the group
    pub async fn place_order(&self, input: NewOrder) -> MarketResult<PlacedOrder> {
        let now = Utc::now();
        let mut tx = self.write().await?;

        require(&tx.tables().vendors, input.vendor_id)?;
        let mut group = require(&tx.tables().groups, input.group_id)?.clone();
        let total_price = input.total_price(group.price_per_unit)?;

        if let Err(err) = aggregation::record_order(&mut group, input.quantity, now) {
            tracing::warn!(
                group_id = %group.id,
                quantity = input.quantity,
                error = %err,
                "order rejected"
            );
            return Err(err.into());
        }

        let order = input.into_order(total_price, now);
        let id = order.id;
        let snapshot = GroupSnapshot::from(&group);
        tx.put(Record::from(order))?;
        tx.put(Record::from(group))?;
        tx.commit()?;

        tracing::info!(
            order_id = %id,
            group_id = %snapshot.id,
            current_quantity = snapshot.current_quantity,
            status = %snapshot.status,
            "order placed"
        );
        Ok(PlacedOrder {
            success: true,
            id,
            group: snapshot,
        })
    }

    /// Orders in creation order, optionally restricted to one vendor
    pub async fn list_orders(&self, vendor_id: Option<Uuid>) -> MarketResult<Vec<OrderView>> {
        let tx = self.read().await?;
        let tables = tx.tables();

        let orders: Vec<OrderView> = tables
            .orders
            .iter()
            .filter(|order| vendor_id.is_none_or(|id| order.vendor_id == id))
            .map(|order| project(tables, order))
            .collect();

        tracing::debug!(count = orders.len(), vendor_id = ?vendor_id, "listed orders");
        Ok(orders)
    }

    /// A group's orders with their summed quantity and amount
    ///
    /// `savings` compares the group price against the product's list price.
    pub async fn group_orders(&self, group_id: Uuid) -> MarketResult<GroupOrders> {
        let tx = self.read().await?;
        let tables = tx.tables();
        let group = require(&tables.groups, group_id)?;

        let orders: Vec<OrderView> = tables
            .orders
            .iter()
            .filter(|order| order.group_id == group_id)
            .map(|order| project(tables, order))
            .collect();
        let total_quantity: u64 = orders.iter().map(|order| u64::from(order.quantity)).sum();
        let total_amount = round_cents(orders.iter().map(|order| order.total_price).sum());

        let list_price = tables
            .products
            .get(&group.product_id)
            .map(|product| product.price);
        let savings = list_price.map(|price| {
            round_cents(((price - group.price_per_unit) * total_quantity as f64).max(0.0))
        });

        tracing::debug!(
            group_id = %group_id,
            count = orders.len(),
            total_quantity,
            "listed group orders"
        );
        Ok(GroupOrders {
            group_id,
            group_name: group.name.clone(),
            price_per_unit: group.price_per_unit,
            list_price,
            order_count: orders.len(),
            total_quantity,
            total_amount,
            savings,
            orders,
        })
    }
}
