use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(uuid(Suppliers::Id).primary_key())
                    .col(string(Suppliers::Name))
                    .col(string(Suppliers::Company))
                    .col(string(Suppliers::Phone))
                    .col(string(Suppliers::Email))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Suppliers {
    Table,
    Id,
    Name,
    Company,
    Phone,
    Email,
}
