pub mod repository;
pub mod service;

pub use repository::{InventoryRepository, SeaOrmInventoryRepository};
pub use service::{InventoryInput, InventoryService};
