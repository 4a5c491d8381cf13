//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into service parameters, call the
//! service layer and convert the results back into DTOs.

pub mod abo;
pub mod abo_model;
pub mod auth;
pub mod cafe;
pub mod customer;
pub mod employee;
