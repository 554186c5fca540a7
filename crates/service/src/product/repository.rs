use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::product::{Model as Product, ProductDraft};

/// Storage gateway for products.
///
/// `find_by_id` reports absence as `Ok(None)`; `Err` is reserved for backend failures.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: ProductDraft) -> Result<Product, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, product: ProductDraft) -> Result<Product, ServiceError> {
        Ok(models::product::save(&self.db, product).await?)
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(models::product::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        Ok(models::product::find_by_id(&self.db, id).await?)
    }
}

/// Process-local repository, used in tests and when the server runs with `memory://`.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Store {
        rows: BTreeMap<i64, Product>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryProductRepository {
        inner: RwLock<Store>,
    }

    impl InMemoryProductRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn save(&self, product: ProductDraft) -> Result<Product, ServiceError> {
            let mut store = self.inner.write().await;
            let id = match product.id {
                Some(id) => {
                    store.last_id = store.last_id.max(id);
                    id
                }
                None => {
                    store.last_id += 1;
                    store.last_id
                }
            };
            let row = Product { id, name: product.name, price: product.price };
            store.rows.insert(id, row.clone());
            Ok(row)
        }

        async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
            let store = self.inner.read().await;
            Ok(store.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
            let store = self.inner.read().await;
            Ok(store.rows.get(&id).cloned())
        }
    }
}
