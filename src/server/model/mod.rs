//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these models at the data layer boundary, and
//! controllers convert them into DTOs with `into_dto()`.

pub mod abo;
pub mod abo_model;
pub mod cafe;
pub mod customer;
pub mod employee;
