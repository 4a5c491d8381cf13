//! Abo model (subscription plan) domain model.

use sea_orm::DbErr;

use crate::model::abo_model::AboModelDto;

/// A subscription plan a café can offer.
#[derive(Debug, Clone, PartialEq)]
pub struct AboModel {
    pub id: String,
    pub special_drinks: bool,
    pub price_per_week: u32,
    pub drink_allowance: u32,
}

impl AboModel {
    /// Converts an entity to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(AboModel)` - Converted model
    /// - `Err(DbErr::Custom)` - Stored price or allowance is negative
    pub fn from_entity(entity: entity::abo_model::Model) -> Result<Self, DbErr> {
        let price_per_week = u32::try_from(entity.price_per_week)
            .map_err(|e| DbErr::Custom(format!("Failed to convert price_per_week: {}", e)))?;
        let drink_allowance = u32::try_from(entity.drink_allowance)
            .map_err(|e| DbErr::Custom(format!("Failed to convert drink_allowance: {}", e)))?;

        Ok(Self {
            id: entity.id,
            special_drinks: entity.special_drinks,
            price_per_week,
            drink_allowance,
        })
    }

    pub fn into_dto(self) -> AboModelDto {
        AboModelDto {
            id: self.id,
            special_drinks: self.special_drinks,
            price_per_week: self.price_per_week,
            drink_allowance: self.drink_allowance,
        }
    }
}

impl From<AboModelDto> for AboModel {
    fn from(dto: AboModelDto) -> Self {
        Self {
            id: dto.id,
            special_drinks: dto.special_drinks,
            price_per_week: dto.price_per_week,
            drink_allowance: dto.drink_allowance,
        }
    }
}
