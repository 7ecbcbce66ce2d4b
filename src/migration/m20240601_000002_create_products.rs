use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_suppliers::Suppliers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(uuid(Products::Id).primary_key())
                    .col(string(Products::Name))
                    .col(integer(Products::QuantityInStock).default(0))
                    .col(integer(Products::QuantitySold).default(0))
                    .col(big_integer(Products::UnitPrice).default(0))
                    .col(big_integer(Products::Revenue).default(0))
                    .col(uuid(Products::SuppliedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_supplied_by")
                            .from(Products::Table, Products::SuppliedBy)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_supplied_by")
                    .table(Products::Table)
                    .col(Products::SuppliedBy)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    QuantityInStock,
    QuantitySold,
    UnitPrice,
    Revenue,
    SuppliedBy,
}
