//! Customer domain models and parameters.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::customer::{CustomerDto, CustomerStatisticsDto},
    server::model::abo::Abo,
};

/// How a customer pays for their abo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    PayPal,
}

impl PaymentMethod {
    /// Stored representation: `0` for cash, `1` for PayPal.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Cash => 0,
            Self::PayPal => 1,
        }
    }
}

impl TryFrom<i32> for PaymentMethod {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Cash),
            1 => Ok(Self::PayPal),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub last_paid: NaiveDate,
    pub activated: bool,
    pub payment_method: PaymentMethod,
    pub drinks_drunk: u32,
}

impl Customer {
    /// Converts an entity to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Err(DbErr::Custom)` - Unknown stored payment method or negative drink count
    pub fn from_entity(entity: entity::customer::Model) -> Result<Self, DbErr> {
        let payment_method = PaymentMethod::try_from(entity.payment_method)
            .map_err(|v| DbErr::Custom(format!("Unknown payment method {}", v)))?;
        let drinks_drunk = u32::try_from(entity.drinks_drunk)
            .map_err(|e| DbErr::Custom(format!("Failed to convert drinks_drunk: {}", e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            last_paid: entity.last_paid,
            activated: entity.activated,
            payment_method,
            drinks_drunk,
        })
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            name: self.name,
            email: self.email,
            drinks_drunk: self.drinks_drunk,
            last_paid: self.last_paid,
        }
    }
}

/// Customer profile together with the current abo, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerStatistics {
    pub customer: Customer,
    pub abo: Option<Abo>,
}

impl CustomerStatistics {
    pub fn into_dto(self) -> CustomerStatisticsDto {
        CustomerStatisticsDto {
            name: self.customer.name,
            email: self.customer.email,
            drinks_drunk: self.customer.drinks_drunk,
            activated: self.customer.activated,
            abo: self.abo.map(Abo::into_dto),
        }
    }
}

/// Parameters for registering or updating a customer. The password is plaintext here.
#[derive(Debug, Clone)]
pub struct CustomerParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub payment_method: PaymentMethod,
}

/// Values written by the repository when inserting a customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub last_paid: NaiveDate,
    pub payment_method: PaymentMethod,
}
