use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};

use crate::server::model::cafe::{Cafe, CreateCafeParams, UpdateCafeParams};

pub struct CafeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CafeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a café and links the listed abo models that exist.
    ///
    /// Unknown abo model IDs are skipped.
    pub async fn create(&self, params: CreateCafeParams) -> Result<Cafe, DbErr> {
        let cafe = entity::cafe::ActiveModel {
            id: ActiveValue::Set(params.id),
            iban: ActiveValue::Set(params.bank_details.iban.into_inner()),
            bic: ActiveValue::Set(params.bank_details.bic.into_inner()),
            account_holder: ActiveValue::Set(params.account_holder),
        }
        .insert(self.db)
        .await?;

        self.link_abo_models(&cafe.id, params.abo_model_ids).await?;

        let links = self.links_for(&cafe.id).await?;

        Ok(Cafe::from_entity(cafe, links))
    }

    /// Gets a café by ID together with its offered abo model IDs
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Cafe>, DbErr> {
        let Some(cafe) = entity::prelude::Cafe::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let links = self.links_for(&cafe.id).await?;

        Ok(Some(Cafe::from_entity(cafe, links)))
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Cafe::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets all cafés ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Cafe>, DbErr> {
        let cafes = entity::prelude::Cafe::find()
            .order_by_asc(entity::cafe::Column::Id)
            .all(self.db)
            .await?;

        // Fetch all links in one query
        let mut links_by_cafe: HashMap<String, Vec<entity::cafe_abo_model::Model>> =
            HashMap::new();
        for link in entity::prelude::CafeAboModel::find().all(self.db).await? {
            links_by_cafe
                .entry(link.cafe_id.clone())
                .or_default()
                .push(link);
        }

        Ok(cafes
            .into_iter()
            .map(|cafe| {
                let links = links_by_cafe.remove(&cafe.id).unwrap_or_default();
                Cafe::from_entity(cafe, links)
            })
            .collect())
    }

    /// Updates bank data and adds abo model links. Existing links are kept.
    ///
    /// Returns None if the café doesn't exist.
    pub async fn update(&self, params: UpdateCafeParams) -> Result<Option<Cafe>, DbErr> {
        let Some(cafe) = entity::prelude::Cafe::find_by_id(&params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::cafe::ActiveModel = cafe.into();
        active_model.iban = ActiveValue::Set(params.bank_details.iban.into_inner());
        active_model.bic = ActiveValue::Set(params.bank_details.bic.into_inner());
        active_model.account_holder = ActiveValue::Set(params.account_holder);
        let cafe = active_model.update(self.db).await?;

        self.link_abo_models(&cafe.id, params.abo_model_ids).await?;

        let links = self.links_for(&cafe.id).await?;

        Ok(Some(Cafe::from_entity(cafe, links)))
    }

    /// Deletes a café. Employees, plan links and abos go with it.
    ///
    /// Returns true if a café was deleted.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Cafe::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn links_for(&self, cafe_id: &str) -> Result<Vec<entity::cafe_abo_model::Model>, DbErr> {
        entity::prelude::CafeAboModel::find()
            .filter(entity::cafe_abo_model::Column::CafeId.eq(cafe_id))
            .all(self.db)
            .await
    }

    /// Links every listed abo model that exists and is not linked yet
    async fn link_abo_models(&self, cafe_id: &str, abo_model_ids: Vec<String>) -> Result<(), DbErr> {
        if abo_model_ids.is_empty() {
            return Ok(());
        }

        let existing: HashSet<String> = entity::prelude::AboModel::find()
            .filter(entity::abo_model::Column::Id.is_in(abo_model_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let mut linked: HashSet<String> = self
            .links_for(cafe_id)
            .await?
            .into_iter()
            .map(|l| l.abo_model_id)
            .collect();

        for abo_model_id in abo_model_ids {
            if !existing.contains(&abo_model_id) {
                tracing::debug!(
                    cafe_id,
                    abo_model_id = %abo_model_id,
                    "Skipping unknown abo model"
                );
                continue;
            }
            if !linked.insert(abo_model_id.clone()) {
                continue;
            }

            entity::prelude::CafeAboModel::insert(entity::cafe_abo_model::ActiveModel {
                cafe_id: ActiveValue::Set(cafe_id.to_string()),
                abo_model_id: ActiveValue::Set(abo_model_id),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }
}
