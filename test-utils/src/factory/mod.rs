//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each entity
//! has its own module with a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let cafe = factory::cafe::create_cafe(&db).await?;
//!     let customer = factory::customer::create_customer(&db).await?;
//!
//!     // Café offering a freshly created abo model
//!     let (cafe, abo_model) = factory::helpers::create_cafe_offering_abo_model(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let employee = factory::employee::EmployeeFactory::new(&db, &cafe.id)
//!     .id("barista")
//!     .sudo(true)
//!     .build()
//!     .await?;
//! ```

pub mod abo;
pub mod abo_model;
pub mod cafe;
pub mod customer;
pub mod employee;
pub mod helpers;

pub use abo::create_abo;
pub use abo_model::create_abo_model;
pub use cafe::{create_cafe, offer_abo_model};
pub use customer::create_customer;
pub use employee::create_employee;
