use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cafe::Table)
                    .if_not_exists()
                    .col(string(Cafe::Id).primary_key())
                    .col(string(Cafe::Iban))
                    .col(string(Cafe::Bic))
                    .col(string(Cafe::AccountHolder))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cafe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cafe {
    Table,
    Id,
    Iban,
    Bic,
    AccountHolder,
}
