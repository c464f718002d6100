//! Create `inventory` table.
//!
//! `sku` carries the unique constraint; the service pre-checks duplicates
//! but this constraint is the arbiter under concurrent writes.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(pk_auto(Inventory::Id))
                    .col(string_len(Inventory::Name, 100).not_null())
                    .col(string_len_null(Inventory::Category, 50))
                    .col(text_null(Inventory::Description))
                    .col(string_len(Inventory::Sku, 50).unique_key().not_null())
                    .col(integer(Inventory::Quantity).default(0).not_null())
                    .col(decimal_len_null(Inventory::Price, 10, 2))
                    .col(boolean(Inventory::Available).default(true).not_null())
                    .col(timestamp_with_time_zone(Inventory::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Inventory::LastUpdated).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Inventory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Id,
    Name,
    Category,
    Description,
    Sku,
    Quantity,
    Price,
    Available,
    CreatedAt,
    LastUpdated,
}
