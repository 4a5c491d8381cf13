//! Business logic layer.
//!
//! Services sit between controllers and repositories. They enforce the domain rules
//! (bank detail validation, abo assignment, credential checks) and translate storage
//! outcomes into `AppError` variants.

pub mod abo;
pub mod abo_model;
pub mod cafe;
pub mod customer;
pub mod employee;
