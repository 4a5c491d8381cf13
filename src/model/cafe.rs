use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CafeDto {
    pub id: String,
    pub iban: String,
    pub bic: String,
    pub account_holder: String,
    pub abo_model_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCafeDto {
    /// Café name; spaces are replaced with underscores to form the ID.
    pub id: String,
    pub iban: String,
    pub bic: String,
    pub account_holder: String,
    #[serde(default)]
    pub abo_model_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCafeDto {
    pub iban: String,
    pub bic: String,
    pub account_holder: String,
    /// Plans to add to the café's offering. Plans already offered are kept.
    #[serde(default)]
    pub abo_model_ids: Vec<String>,
}
