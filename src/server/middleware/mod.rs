//! Session wrappers and access guards used by controllers.

pub mod auth;
pub mod session;
