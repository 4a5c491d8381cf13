use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::abo::AboDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub drinks_drunk: u32,
    pub last_paid: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `0` for cash, `1` for PayPal.
    pub payment_method: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CustomerStatisticsDto {
    pub name: String,
    pub email: String,
    pub drinks_drunk: u32,
    pub activated: bool,
    pub abo: Option<AboDto>,
}
