pub use super::abo::Entity as Abo;
pub use super::abo_model::Entity as AboModel;
pub use super::cafe::Entity as Cafe;
pub use super::cafe_abo_model::Entity as CafeAboModel;
pub use super::customer::Entity as Customer;
pub use super::employee::Entity as Employee;
