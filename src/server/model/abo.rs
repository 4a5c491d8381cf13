//! Abo (subscription) domain model and the parameters of an abo request.

use chrono::{DateTime, Utc};

use crate::model::abo::{AboDto, CreateAboDto};

/// A customer's subscription to an abo model at a café.
#[derive(Debug, Clone, PartialEq)]
pub struct Abo {
    pub id: String,
    pub abo_model_id: String,
    pub customer_id: String,
    pub cafe_id: String,
    pub created_at: DateTime<Utc>,
}

impl Abo {
    pub fn from_entity(entity: entity::abo::Model) -> Self {
        Self {
            id: entity.id,
            abo_model_id: entity.abo_model_id,
            customer_id: entity.customer_id,
            cafe_id: entity.cafe_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AboDto {
        AboDto {
            id: self.id,
            abo_model_id: self.abo_model_id,
            customer_id: self.customer_id,
            cafe_id: self.cafe_id,
            created_at: self.created_at,
        }
    }
}

/// An abo request, as accepted from the client.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAboParams {
    pub cafe_id: String,
    pub abo_model_id: String,
    pub customer_id: String,
}

impl CreateAboParams {
    pub fn from_dto(dto: CreateAboDto) -> Self {
        Self {
            cafe_id: dto.cafe_id,
            abo_model_id: dto.abo_model_id,
            customer_id: dto.customer_id,
        }
    }
}

/// A fully identified abo ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAbo {
    pub id: String,
    pub abo_model_id: String,
    pub customer_id: String,
    pub cafe_id: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of inserting an abo.
#[derive(Debug, Clone, PartialEq)]
pub enum AboInsert {
    Inserted(Abo),
    /// The customer already holds an abo; nothing was written.
    Duplicate,
}
