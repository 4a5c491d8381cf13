use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::abo_model::AboModel;

pub struct AboModelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AboModelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, abo_model: AboModel) -> Result<AboModel, DbErr> {
        let entity = to_active_model(abo_model)?.insert(self.db).await?;

        AboModel::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<AboModel>, DbErr> {
        entity::prelude::AboModel::find_by_id(id)
            .one(self.db)
            .await?
            .map(AboModel::from_entity)
            .transpose()
    }

    /// Gets all abo models ordered by ID
    pub async fn get_all(&self) -> Result<Vec<AboModel>, DbErr> {
        entity::prelude::AboModel::find()
            .order_by_asc(entity::abo_model::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(AboModel::from_entity)
            .collect()
    }

    /// Replaces all fields of an abo model.
    ///
    /// Returns None if the abo model doesn't exist.
    pub async fn update(&self, abo_model: AboModel) -> Result<Option<AboModel>, DbErr> {
        if entity::prelude::AboModel::find_by_id(&abo_model.id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let entity = to_active_model(abo_model)?.update(self.db).await?;

        AboModel::from_entity(entity).map(Some)
    }

    /// Deletes an abo model and its café links.
    ///
    /// Returns true if an abo model was deleted.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AboModel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Whether any abo still refers to the abo model
    pub async fn is_referenced(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Abo::find()
            .filter(entity::abo::Column::AboModelId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

fn to_active_model(abo_model: AboModel) -> Result<entity::abo_model::ActiveModel, DbErr> {
    let price_per_week = i32::try_from(abo_model.price_per_week)
        .map_err(|e| DbErr::Custom(format!("price_per_week out of range: {}", e)))?;
    let drink_allowance = i32::try_from(abo_model.drink_allowance)
        .map_err(|e| DbErr::Custom(format!("drink_allowance out of range: {}", e)))?;

    Ok(entity::abo_model::ActiveModel {
        id: ActiveValue::Set(abo_model.id),
        special_drinks: ActiveValue::Set(abo_model.special_drinks),
        price_per_week: ActiveValue::Set(price_per_week),
        drink_allowance: ActiveValue::Set(drink_allowance),
    })
}
