//! Café domain models and parameters.

use crate::{model::cafe::CafeDto, server::util::bank::BankDetails};

/// A café with the IDs of the abo models it offers.
#[derive(Debug, Clone, PartialEq)]
pub struct Cafe {
    pub id: String,
    pub iban: String,
    pub bic: String,
    pub account_holder: String,
    /// Sorted ascending.
    pub abo_model_ids: Vec<String>,
}

impl Cafe {
    /// Converts the café entity and its plan links to a domain model.
    pub fn from_entity(
        entity: entity::cafe::Model,
        links: Vec<entity::cafe_abo_model::Model>,
    ) -> Self {
        let mut abo_model_ids: Vec<String> = links.into_iter().map(|l| l.abo_model_id).collect();
        abo_model_ids.sort();

        Self {
            id: entity.id,
            iban: entity.iban,
            bic: entity.bic,
            account_holder: entity.account_holder,
            abo_model_ids,
        }
    }

    pub fn into_dto(self) -> CafeDto {
        CafeDto {
            id: self.id,
            iban: self.iban,
            bic: self.bic,
            account_holder: self.account_holder,
            abo_model_ids: self.abo_model_ids,
        }
    }
}

/// Parameters for persisting a new café. Bank details are already validated.
#[derive(Debug, Clone)]
pub struct CreateCafeParams {
    pub id: String,
    pub bank_details: BankDetails,
    pub account_holder: String,
    pub abo_model_ids: Vec<String>,
}

/// Parameters for updating a café's bank data and extending its plan offering.
#[derive(Debug, Clone)]
pub struct UpdateCafeParams {
    pub id: String,
    pub bank_details: BankDetails,
    pub account_holder: String,
    pub abo_model_ids: Vec<String>,
}
