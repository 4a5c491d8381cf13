//! Stateless helpers used by the service layer.

pub mod bank;
pub mod email;
pub mod password;
