use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::employee::{Employee, EmployeeRecord};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, record: EmployeeRecord) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Set(record.id),
            cafe_id: ActiveValue::Set(record.cafe_id),
            name: ActiveValue::Set(record.name),
            hashed_password: ActiveValue::Set(record.hashed_password),
            sudo: ActiveValue::Set(record.sudo),
        }
        .insert(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    pub async fn find_by_id(&self, cafe_id: &str, id: &str) -> Result<Option<Employee>, DbErr> {
        Ok(self
            .find_entity(cafe_id, id)
            .await?
            .map(Employee::from_entity))
    }

    /// Gets the stored password hash of an employee, for login only
    pub async fn find_password_hash(
        &self,
        cafe_id: &str,
        id: &str,
    ) -> Result<Option<String>, DbErr> {
        Ok(self
            .find_entity(cafe_id, id)
            .await?
            .map(|e| e.hashed_password))
    }

    /// Gets all employees of a café ordered by ID
    pub async fn get_all_by_cafe(&self, cafe_id: &str) -> Result<Vec<Employee>, DbErr> {
        Ok(entity::prelude::Employee::find()
            .filter(entity::employee::Column::CafeId.eq(cafe_id))
            .order_by_asc(entity::employee::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Employee::from_entity)
            .collect())
    }

    pub async fn count_by_cafe(&self, cafe_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::CafeId.eq(cafe_id))
            .count(self.db)
            .await
    }

    /// Replaces name, password hash and sudo flag.
    ///
    /// Returns None if the employee doesn't exist.
    pub async fn update(&self, record: EmployeeRecord) -> Result<Option<Employee>, DbErr> {
        let Some(existing) = self.find_entity(&record.cafe_id, &record.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::employee::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(record.name);
        active_model.hashed_password = ActiveValue::Set(record.hashed_password);
        active_model.sudo = ActiveValue::Set(record.sudo);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Employee::from_entity(entity)))
    }

    /// Returns true if an employee was deleted
    pub async fn delete(&self, cafe_id: &str, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Employee::delete_many()
            .filter(entity::employee::Column::CafeId.eq(cafe_id))
            .filter(entity::employee::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(
        &self,
        cafe_id: &str,
        id: &str,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id((id.to_string(), cafe_id.to_string()))
            .one(self.db)
            .await
    }
}
