use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmployeeDto {
    pub id: String,
    pub cafe_id: String,
    pub name: String,
    pub sudo: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEmployeeDto {
    pub id: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub sudo: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateEmployeeDto {
    pub name: String,
    pub password: String,
    pub sudo: bool,
}
