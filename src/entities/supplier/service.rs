//! Supplier listing and reviews

use super::model::SupplierView;
use crate::core::error::MarketResult;
use crate::core::service::{MarketService, require};
use crate::core::store::Record;
use crate::entities::review::{NewReview, ReviewView, SupplierReviews};
use uuid::Uuid;

impl MarketService {
    /// Every supplier in creation order, independent of their reviews
    pub async fn list_suppliers(&self) -> MarketResult<Vec<SupplierView>> {
        let tx = self.read().await?;
        let suppliers: Vec<SupplierView> = tx
            .tables()
            .suppliers
            .iter()
            .map(SupplierView::from)
            .collect();

        tracing::debug!(count = suppliers.len(), "listed suppliers");
        Ok(suppliers)
    }

    /// Record a vendor's review of a supplier
    pub async fn submit_review(&self, input: NewReview) -> MarketResult<Uuid> {
        let mut tx = self.write().await?;
        require(&tx.tables().vendors, input.vendor_id)?;
        require(&tx.tables().suppliers, input.supplier_id)?;

        let review = input.into_review();
        let id = review.id;
        let (rating, supplier_id) = (review.rating, review.supplier_id);
        tx.put(Record::from(review))?;
        tx.commit()?;

        tracing::info!(review_id = %id, supplier_id = %supplier_id, rating, "review submitted");
        Ok(id)
    }

    /// Reviews of one supplier, oldest first
    pub async fn supplier_reviews(&self, supplier_id: Uuid) -> MarketResult<SupplierReviews> {
        let tx = self.read().await?;
        let tables = tx.tables();
        require(&tables.suppliers, supplier_id)?;

        let reviews = tables
            .reviews
            .iter()
            .filter(|review| review.supplier_id == supplier_id)
            .map(|review| ReviewView {
                id: review.id,
                rating: review.rating,
                comment: review.comment.clone(),
                vendor_id: review.vendor_id,
                vendor_name: tables
                    .vendors
                    .get(&review.vendor_id)
                    .map(|vendor| vendor.name.clone())
                    .unwrap_or_default(),
                created_at: review.created_at,
            })
            .collect();

        Ok(SupplierReviews::new(supplier_id, reviews))
    }
}
