use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sku: String,
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price: Option<Decimal>,
    pub available: bool,
    pub created_at: DateTimeWithTimeZone,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// The mutable attribute set of a record. `id` and `created_at` are owned
/// by the store and never pass through here.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryData {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub sku: String,
    pub quantity: i32,
    pub price: Option<Decimal>,
    pub available: bool,
}

/// Exact-match conjunction over the filterable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

fn map_db_err(e: DbErr) -> ModelError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ModelError::Conflict("sku already exists".into())
        }
        _ => ModelError::Db(e.to_string()),
    }
}

/// Insert a new record. The id comes from the table sequence and both
/// timestamps are set from the same instant.
pub async fn insert(db: &DatabaseConnection, data: &InventoryData) -> Result<Model, ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        name: Set(data.name.clone()),
        category: Set(data.category.clone()),
        description: Set(data.description.clone()),
        sku: Set(data.sku.clone()),
        quantity: Set(data.quantity),
        price: Set(data.price),
        available: Set(data.available),
        created_at: Set(now),
        last_updated: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(map_db_err)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(map_db_err)
}

pub async fn find_by_sku(db: &DatabaseConnection, sku: &str) -> Result<Option<Model>, ModelError> {
    Entity::find().filter(Column::Sku.eq(sku)).one(db).await.map_err(map_db_err)
}

/// Replace all mutable fields and refresh `last_updated`. Returns `None`
/// when no record has that id.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    data: &InventoryData,
) -> Result<Option<Model>, ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await.map_err(map_db_err)? else {
        return Ok(None);
    };
    let mut am: ActiveModel = existing.into();
    am.name = Set(data.name.clone());
    am.category = Set(data.category.clone());
    am.description = Set(data.description.clone());
    am.sku = Set(data.sku.clone());
    am.quantity = Set(data.quantity);
    am.price = Set(data.price);
    am.available = Set(data.available);
    am.last_updated = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(map_db_err)?;
    Ok(Some(updated))
}

/// Hard delete. Reports whether a row was actually removed; absence is
/// not an error at this layer.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(map_db_err)?;
    Ok(res.rows_affected > 0)
}

/// All records matching the filter, in insertion (id) order.
pub async fn list(db: &DatabaseConnection, filter: &ListFilter) -> Result<Vec<Model>, ModelError> {
    let mut query = Entity::find();
    if let Some(name) = &filter.name {
        query = query.filter(Column::Name.eq(name));
    }
    if let Some(category) = &filter.category {
        query = query.filter(Column::Category.eq(category));
    }
    if let Some(available) = filter.available {
        query = query.filter(Column::Available.eq(available));
    }
    query.order_by_asc(Column::Id).all(db).await.map_err(map_db_err)
}
