use crate::server::{
    data::abo::AboStore,
    error::{abo::AboError, AppError},
    model::abo::{Abo, AboInsert, CreateAboParams, NewAbo},
    service::abo::AboService,
};
use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::Mutex;
use test_utils::{builder::TestBuilder, factory};

mod database;

/// In-memory store answering with fixed values and recording each call.
struct RecordingStore {
    cafe_exists: bool,
    offers_model: bool,
    has_abo: bool,
    duplicate_on_insert: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingStore {
    /// A store for which every check passes.
    fn accepting() -> Self {
        Self {
            cafe_exists: true,
            offers_model: true,
            has_abo: false,
            duplicate_on_insert: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<'s> AboStore for &'s RecordingStore {
    async fn cafe_exists(&self, _cafe_id: &str) -> Result<bool, DbErr> {
        self.record("cafe_exists");
        Ok(self.cafe_exists)
    }

    async fn cafe_offers_model(&self, _cafe_id: &str, _abo_model_id: &str) -> Result<bool, DbErr> {
        self.record("cafe_offers_model");
        Ok(self.offers_model)
    }

    async fn customer_has_abo(&self, _customer_id: &str) -> Result<bool, DbErr> {
        self.record("customer_has_abo");
        Ok(self.has_abo)
    }

    async fn insert_abo(&self, abo: NewAbo) -> Result<AboInsert, DbErr> {
        self.record("insert_abo");
        if self.duplicate_on_insert {
            return Ok(AboInsert::Duplicate);
        }

        Ok(AboInsert::Inserted(Abo {
            id: abo.id,
            abo_model_id: abo.abo_model_id,
            customer_id: abo.customer_id,
            cafe_id: abo.cafe_id,
            created_at: abo.created_at,
        }))
    }
}

fn params(cafe_id: &str) -> CreateAboParams {
    CreateAboParams {
        cafe_id: cafe_id.to_string(),
        abo_model_id: "weekly".to_string(),
        customer_id: "customer-1".to_string(),
    }
}
