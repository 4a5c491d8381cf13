use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(string(Customer::Id).primary_key())
                    .col(string(Customer::Name))
                    .col(string_uniq(Customer::Email))
                    .col(string(Customer::HashedPassword))
                    .col(date(Customer::LastPaid))
                    .col(boolean(Customer::Activated).default(true))
                    .col(integer(Customer::PaymentMethod))
                    .col(integer(Customer::DrinksDrunk).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    Name,
    Email,
    HashedPassword,
    LastPaid,
    Activated,
    PaymentMethod,
    DrinksDrunk,
}
