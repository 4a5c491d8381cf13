//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities together with
//! their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a café together with an abo model it offers.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((cafe, abo_model))` - The café and the linked abo model
/// - `Err(DbErr)` - Database error during creation
pub async fn create_cafe_offering_abo_model(
    db: &DatabaseConnection,
) -> Result<(entity::cafe::Model, entity::abo_model::Model), DbErr> {
    let cafe = crate::factory::cafe::create_cafe(db).await?;
    let abo_model = crate::factory::abo_model::create_abo_model(db).await?;
    crate::factory::cafe::offer_abo_model(db, &cafe.id, &abo_model.id).await?;

    Ok((cafe, abo_model))
}

/// Creates a customer holding an abo at a fresh café.
///
/// Builds the café, an abo model offered by it, the customer and the abo.
///
/// # Returns
/// - `Ok((cafe, abo_model, customer, abo))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_abo_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::cafe::Model,
        entity::abo_model::Model,
        entity::customer::Model,
        entity::abo::Model,
    ),
    DbErr,
> {
    let (cafe, abo_model) = create_cafe_offering_abo_model(db).await?;
    let customer = crate::factory::customer::create_customer(db).await?;
    let abo = crate::factory::abo::create_abo(db, &cafe.id, &abo_model.id, &customer.id).await?;

    Ok((cafe, abo_model, customer, abo))
}
