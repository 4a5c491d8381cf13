use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::is_unique_violation,
    model::abo::{Abo, AboInsert, NewAbo},
};

/// Storage operations the abo assignment rules depend on.
#[async_trait]
pub trait AboStore: Send + Sync {
    async fn cafe_exists(&self, cafe_id: &str) -> Result<bool, DbErr>;

    /// Whether the abo model is linked to the café.
    async fn cafe_offers_model(&self, cafe_id: &str, abo_model_id: &str) -> Result<bool, DbErr>;

    async fn customer_has_abo(&self, customer_id: &str) -> Result<bool, DbErr>;

    /// Inserts the abo in a single statement.
    ///
    /// A customer that already holds an abo yields `AboInsert::Duplicate` rather than an error.
    async fn insert_abo(&self, abo: NewAbo) -> Result<AboInsert, DbErr>;
}

pub struct AboRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AboRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all abos of a café, oldest first
    pub async fn get_by_cafe(&self, cafe_id: &str) -> Result<Vec<Abo>, DbErr> {
        Ok(entity::prelude::Abo::find()
            .filter(entity::abo::Column::CafeId.eq(cafe_id))
            .order_by_asc(entity::abo::Column::CreatedAt)
            .order_by_asc(entity::abo::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Abo::from_entity)
            .collect())
    }

    pub async fn find_by_customer(&self, customer_id: &str) -> Result<Option<Abo>, DbErr> {
        Ok(entity::prelude::Abo::find()
            .filter(entity::abo::Column::CustomerId.eq(customer_id))
            .one(self.db)
            .await?
            .map(Abo::from_entity))
    }
}

#[async_trait]
impl AboStore for AboRepository<'_> {
    async fn cafe_exists(&self, cafe_id: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Cafe::find_by_id(cafe_id)
            .one(self.db)
            .await?
            .is_some())
    }

    async fn cafe_offers_model(&self, cafe_id: &str, abo_model_id: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::CafeAboModel::find_by_id((
            cafe_id.to_string(),
            abo_model_id.to_string(),
        ))
        .one(self.db)
        .await?
        .is_some())
    }

    async fn customer_has_abo(&self, customer_id: &str) -> Result<bool, DbErr> {
        Ok(self.find_by_customer(customer_id).await?.is_some())
    }

    async fn insert_abo(&self, abo: NewAbo) -> Result<AboInsert, DbErr> {
        let result = entity::abo::ActiveModel {
            id: ActiveValue::Set(abo.id),
            abo_model_id: ActiveValue::Set(abo.abo_model_id),
            customer_id: ActiveValue::Set(abo.customer_id),
            cafe_id: ActiveValue::Set(abo.cafe_id),
            created_at: ActiveValue::Set(abo.created_at),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(AboInsert::Inserted(Abo::from_entity(entity))),
            Err(err) if is_unique_violation(&err) => Ok(AboInsert::Duplicate),
            Err(err) => Err(err),
        }
    }
}
