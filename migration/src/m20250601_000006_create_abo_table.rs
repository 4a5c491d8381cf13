use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_cafe_table::Cafe;
use super::m20250601_000002_create_abo_model_table::AboModel;
use super::m20250601_000005_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Abo::Table)
                    .if_not_exists()
                    .col(string(Abo::Id).primary_key())
                    .col(string(Abo::AboModelId))
                    // Backstop for the one-abo-per-customer rule under concurrent inserts
                    .col(string_uniq(Abo::CustomerId))
                    .col(string(Abo::CafeId))
                    .col(timestamp_with_time_zone(Abo::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abo_abo_model_id")
                            .from(Abo::Table, Abo::AboModelId)
                            .to(AboModel::Table, AboModel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abo_customer_id")
                            .from(Abo::Table, Abo::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abo_cafe_id")
                            .from(Abo::Table, Abo::CafeId)
                            .to(Cafe::Table, Cafe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Abo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Abo {
    Table,
    Id,
    AboModelId,
    CustomerId,
    CafeId,
    CreatedAt,
}
