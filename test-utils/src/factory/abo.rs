//! Abo factory for inserting subscriptions directly, bypassing the assignment rules.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an abo linking the given café, abo model and customer.
///
/// # Arguments
/// - `db` - Database connection
/// - `cafe_id` - ID of an existing café
/// - `abo_model_id` - ID of an existing abo model
/// - `customer_id` - ID of an existing customer
///
/// # Returns
/// - `Ok(entity::abo::Model)` - Created abo entity
/// - `Err(DbErr)` - Database error during insert (e.g. customer already holds an abo)
pub async fn create_abo(
    db: &DatabaseConnection,
    cafe_id: &str,
    abo_model_id: &str,
    customer_id: &str,
) -> Result<entity::abo::Model, DbErr> {
    entity::abo::ActiveModel {
        id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
        abo_model_id: ActiveValue::Set(abo_model_id.to_string()),
        customer_id: ActiveValue::Set(customer_id.to_string()),
        cafe_id: ActiveValue::Set(cafe_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
