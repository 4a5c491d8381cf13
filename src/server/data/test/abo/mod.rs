use crate::server::{
    data::abo::{AboRepository, AboStore},
    model::abo::{AboInsert, NewAbo},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_cafe;

fn new_abo(cafe_id: &str, abo_model_id: &str, customer_id: &str) -> NewAbo {
    NewAbo {
        id: uuid::Uuid::new_v4().to_string(),
        abo_model_id: abo_model_id.to_string(),
        customer_id: customer_id.to_string(),
        cafe_id: cafe_id.to_string(),
        created_at: Utc::now(),
    }
}
