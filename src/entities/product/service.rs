//! Product listing and creation

use super::model::{NewProduct, ProductView};
use crate::core::error::MarketResult;
use crate::core::service::{MarketService, require};
use crate::core::store::Record;
use uuid::Uuid;

impl MarketService {
    /// Products in creation order, optionally restricted to one supplier
    pub async fn list_products(&self, supplier_id: Option<Uuid>) -> MarketResult<Vec<ProductView>> {
        let tx = self.read().await?;
        let tables = tx.tables();

        let products: Vec<ProductView> = tables
            .products
            .iter()
            .filter(|product| supplier_id.is_none_or(|id| product.supplier_id == id))
            .map(|product| {
                let supplier_name = tables
                    .suppliers
                    .get(&product.supplier_id)
                    .map(|supplier| supplier.name.as_str())
                    .unwrap_or_default();
                ProductView::new(product, supplier_name)
            })
            .collect();

        tracing::debug!(count = products.len(), supplier_id = ?supplier_id, "listed products");
        Ok(products)
    }

    pub async fn get_product(&self, id: Uuid) -> MarketResult<ProductView> {
        let tx = self.read().await?;
        let tables = tx.tables();
        let product = require(&tables.products, id)?;
        let supplier_name = tables
            .suppliers
            .get(&product.supplier_id)
            .map(|supplier| supplier.name.as_str())
            .unwrap_or_default();
        Ok(ProductView::new(product, supplier_name))
    }

    pub async fn create_product(&self, input: NewProduct) -> MarketResult<Uuid> {
        let mut tx = self.write().await?;
        require(&tx.tables().suppliers, input.supplier_id)?;

        let product = input.into_product();
        let id = product.id;
        let supplier_id = product.supplier_id;
        tx.put(Record::from(product))?;
        tx.commit()?;

        tracing::info!(product_id = %id, supplier_id = %supplier_id, "product created");
        Ok(id)
    }
}
