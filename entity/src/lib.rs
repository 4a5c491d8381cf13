//! SeaORM entity models for the CoffeeClub database schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relations declared here are
//! also used by `test-utils` to generate equivalent in-memory SQLite schemas.

pub mod prelude;

pub mod abo;
pub mod abo_model;
pub mod cafe;
pub mod cafe_abo_model;
pub mod customer;
pub mod employee;
