use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};

use models::inventory::{InventoryData, ListFilter, Model};

use crate::errors::ServiceError;
use crate::inventory::repository::InventoryRepository;

/// The only action the service currently knows how to perform on a record.
pub const ACTION_TOGGLE: &str = "toggle";

/// Incoming payload for create and update. `name`, `sku` and `quantity`
/// are required; `available` defaults to true when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryInput {
    pub name: String,
    pub sku: String,
    pub quantity: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl InventoryInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::Validation("name must not be empty".into()));
        }
        if self.sku.trim().is_empty() {
            return Err(ServiceError::Validation("sku must not be empty".into()));
        }
        if self.quantity < 0 {
            return Err(ServiceError::Validation("quantity must not be negative".into()));
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(ServiceError::Validation("price must not be negative".into()));
            }
        }
        Ok(())
    }

    fn to_data(&self) -> InventoryData {
        InventoryData {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            sku: self.sku.clone(),
            quantity: self.quantity,
            price: self.price,
            available: self.available,
        }
    }
}

/// Application service encapsulating the inventory business rules. All
/// validation and sku-uniqueness decisions live here; the injected
/// repository is a thin persistence boundary whose unique constraint
/// stays as the race-safe backstop.
pub struct InventoryService<R: InventoryRepository> {
    repo: Arc<R>,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a record. The sku pre-check keeps the store's constraint a
    /// safety net rather than the primary decision surface.
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn create(&self, input: &InventoryInput) -> Result<Model, ServiceError> {
        input.validate()?;
        if self.repo.find_by_sku(&input.sku).await?.is_some() {
            return Err(ServiceError::Conflict("sku already exists".into()));
        }
        let created = self.repo.insert(&input.to_data()).await?;
        info!(id = created.id, "inventory_created");
        Ok(created)
    }

    pub async fn read(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("inventory"))
    }

    /// Full replace of the mutable fields. A sku owned by a different
    /// existing record aborts before the store's mutating call runs.
    pub async fn update(&self, id: i32, input: &InventoryInput) -> Result<Model, ServiceError> {
        input.validate()?;
        let current = self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("inventory"))?;
        if input.sku != current.sku {
            if let Some(other) = self.repo.find_by_sku(&input.sku).await? {
                if other.id != id {
                    return Err(ServiceError::Conflict("sku already exists".into()));
                }
            }
        }
        let updated = self
            .repo
            .update(id, &input.to_data())
            .await?
            .ok_or_else(|| ServiceError::not_found("inventory"))?;
        info!(id = updated.id, "inventory_updated");
        Ok(updated)
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Model>, ServiceError> {
        self.repo.list(filter).await
    }

    /// Idempotent delete: removing an absent id is success for the caller.
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(id, removed, "inventory_delete");
        Ok(())
    }

    /// Perform a named domain action on a record. `toggle` flips the
    /// availability flag; anything else is a validation failure.
    pub async fn action(&self, id: i32, name: &str) -> Result<Model, ServiceError> {
        if name != ACTION_TOGGLE {
            return Err(ServiceError::Validation(format!("unknown action '{}'", name)));
        }
        let current = self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("inventory"))?;
        let data = InventoryData {
            name: current.name.clone(),
            category: current.category.clone(),
            description: current.description.clone(),
            sku: current.sku.clone(),
            quantity: current.quantity,
            price: current.price,
            available: !current.available,
        };
        let updated = self
            .repo
            .update(id, &data)
            .await?
            .ok_or_else(|| ServiceError::not_found("inventory"))?;
        info!(id = updated.id, available = updated.available, "inventory_toggled");
        Ok(updated)
    }
}
