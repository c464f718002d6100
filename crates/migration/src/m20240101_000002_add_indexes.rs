//! Secondary indexes backing the list filters.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_category")
                    .table(Inventory::Table)
                    .col(Inventory::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_name")
                    .table(Inventory::Table)
                    .col(Inventory::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_inventory_name").table(Inventory::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_inventory_category").table(Inventory::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Name,
    Category,
}
