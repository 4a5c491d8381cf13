use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_cafe_table::Cafe;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(string(Employee::Id))
                    .col(string(Employee::CafeId))
                    .col(string(Employee::Name))
                    .col(string(Employee::HashedPassword))
                    .col(boolean(Employee::Sudo).default(false))
                    .primary_key(Index::create().col(Employee::Id).col(Employee::CafeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_cafe_id")
                            .from(Employee::Table, Employee::CafeId)
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
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    CafeId,
    Name,
    HashedPassword,
    Sudo,
}
