//! Data transfer objects shared by the HTTP layer.
//!
//! Every type in this module is serialized to or deserialized from JSON request and response
//! bodies and carries a `ToSchema` derive for the generated OpenAPI document.

pub mod abo;
pub mod abo_model;
pub mod api;
pub mod auth;
pub mod cafe;
pub mod customer;
pub mod employee;
