use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;
use models::product::{Model as Product, ProductDraft};

/// Application service for the catalog.
/// Delegates to the storage gateway and turns a missing product into `NotFound`.
pub struct ProductService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> Clone for ProductService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new product. Any id carried by the input is dropped so this always inserts.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: ProductDraft) -> Result<Product, ServiceError> {
        let draft = ProductDraft { id: None, ..product };
        let saved = self.repo.save(draft).await?;
        info!(id = saved.id, price = saved.price, "product_created");
        Ok(saved)
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i64) -> Result<Product, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product"))
    }

    /// Replace the price of an existing product; name and id are kept.
    #[instrument(skip(self))]
    pub async fn update_price(&self, id: i64, new_price: f64) -> Result<Product, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product"))?;
        let mut draft = ProductDraft::from(existing);
        draft.price = new_price;
        let saved = self.repo.save(draft).await?;
        info!(id = saved.id, price = saved.price, "product_price_updated");
        Ok(saved)
    }
}
