//! Employee domain model and parameters.

use crate::model::employee::EmployeeDto;

/// An employee of a café. The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub cafe_id: String,
    pub name: String,
    pub sudo: bool,
}

impl Employee {
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: entity.id,
            cafe_id: entity.cafe_id,
            name: entity.name,
            sudo: entity.sudo,
        }
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            cafe_id: self.cafe_id,
            name: self.name,
            sudo: self.sudo,
        }
    }
}

/// Parameters for creating or replacing an employee. The password is plaintext here and hashed
/// by the service.
#[derive(Debug, Clone)]
pub struct EmployeeParams {
    pub cafe_id: String,
    pub id: String,
    pub name: String,
    pub password: String,
    pub sudo: bool,
}

/// Values written by the repository. The password is already hashed.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub cafe_id: String,
    pub id: String,
    pub name: String,
    pub hashed_password: String,
    pub sudo: bool,
}
