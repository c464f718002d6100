use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::inventory::{InventoryData, ListFilter, Model};

use crate::errors::ServiceError;

/// Storage boundary for inventory records. The store owns id assignment,
/// timestamps, and the sku unique constraint.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn insert(&self, data: &InventoryData) -> Result<Model, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Model>, ServiceError>;
    async fn update(&self, id: i32, data: &InventoryData) -> Result<Option<Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmInventoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn insert(&self, data: &InventoryData) -> Result<Model, ServiceError> {
        Ok(models::inventory::insert(&self.db, data).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(models::inventory::find(&self.db, id).await?)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Model>, ServiceError> {
        Ok(models::inventory::find_by_sku(&self.db, sku).await?)
    }

    async fn update(&self, id: i32, data: &InventoryData) -> Result<Option<Model>, ServiceError> {
        Ok(models::inventory::update(&self.db, id, data).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(models::inventory::delete(&self.db, id).await?)
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<Model>, ServiceError> {
        Ok(models::inventory::list(&self.db, filter).await?)
    }
}
