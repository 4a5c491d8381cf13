use crate::server::{
    error::AppError, model::abo_model::AboModel, service::abo_model::AboModelService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn weekly() -> AboModel {
    AboModel {
        id: "weekly".to_string(),
        special_drinks: true,
        price_per_week: 12,
        drink_allowance: 10,
    }
}
