use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AboModelDto {
    pub id: String,
    pub special_drinks: bool,
    pub price_per_week: u32,
    pub drink_allowance: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAboModelDto {
    pub special_drinks: bool,
    pub price_per_week: u32,
    pub drink_allowance: u32,
}
