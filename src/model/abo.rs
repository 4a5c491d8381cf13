use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AboDto {
    pub id: String,
    pub abo_model_id: String,
    pub customer_id: String,
    pub cafe_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAboDto {
    pub cafe_id: String,
    pub abo_model_id: String,
    pub customer_id: String,
}
