pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_cafe_table;
mod m20250601_000002_create_abo_model_table;
mod m20250601_000003_create_cafe_abo_model_table;
mod m20250601_000004_create_employee_table;
mod m20250601_000005_create_customer_table;
mod m20250601_000006_create_abo_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_cafe_table::Migration),
            Box::new(m20250601_000002_create_abo_model_table::Migration),
            Box::new(m20250601_000003_create_cafe_abo_model_table::Migration),
            Box::new(m20250601_000004_create_employee_table::Migration),
            Box::new(m20250601_000005_create_customer_table::Migration),
            Box::new(m20250601_000006_create_abo_table::Migration),
        ]
    }
}
