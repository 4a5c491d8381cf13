use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_cafe_table::Cafe;
use super::m20250601_000002_create_abo_model_table::AboModel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CafeAboModel::Table)
                    .if_not_exists()
                    .col(string(CafeAboModel::CafeId))
                    .col(string(CafeAboModel::AboModelId))
                    .primary_key(
                        Index::create()
                            .col(CafeAboModel::CafeId)
                            .col(CafeAboModel::AboModelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cafe_abo_model_cafe_id")
                            .from(CafeAboModel::Table, CafeAboModel::CafeId)
                            .to(Cafe::Table, Cafe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cafe_abo_model_abo_model_id")
                            .from(CafeAboModel::Table, CafeAboModel::AboModelId)
                            .to(AboModel::Table, AboModel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CafeAboModel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CafeAboModel {
    Table,
    CafeId,
    AboModelId,
}
