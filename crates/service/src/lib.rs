//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules (validation, sku uniqueness) from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types mapped to transport codes at the server boundary.

pub mod errors;
pub mod inventory;
#[cfg(test)]
pub mod test_support;
