use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AboModel::Table)
                    .if_not_exists()
                    .col(string(AboModel::Id).primary_key())
                    .col(boolean(AboModel::SpecialDrinks).default(false))
                    .col(integer(AboModel::PricePerWeek))
                    .col(integer(AboModel::DrinkAllowance))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AboModel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AboModel {
    Table,
    Id,
    SpecialDrinks,
    PricePerWeek,
    DrinkAllowance,
}
