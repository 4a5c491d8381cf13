use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::customer::{Customer, CustomerParams, NewCustomer};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an activated customer who has not drunk anything yet
    pub async fn create(&self, customer: NewCustomer) -> Result<Customer, DbErr> {
        let entity = entity::customer::ActiveModel {
            id: ActiveValue::Set(customer.id),
            name: ActiveValue::Set(customer.name),
            email: ActiveValue::Set(customer.email),
            hashed_password: ActiveValue::Set(customer.hashed_password),
            last_paid: ActiveValue::Set(customer.last_paid),
            activated: ActiveValue::Set(true),
            payment_method: ActiveValue::Set(customer.payment_method.as_i32()),
            drinks_drunk: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Customer::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, DbErr> {
        entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?
            .map(Customer::from_entity)
            .transpose()
    }

    /// Whether another customer already uses the email address.
    ///
    /// # Arguments
    /// - `email` - Address to check
    /// - `except_id` - Customer to ignore, used when a customer keeps their own address
    pub async fn email_taken(&self, email: &str, except_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Customer::find().filter(entity::customer::Column::Email.eq(email));

        if let Some(id) = except_id {
            query = query.filter(entity::customer::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Replaces name, email, password hash and payment method.
    ///
    /// Returns None if the customer doesn't exist.
    pub async fn update(
        &self,
        id: &str,
        params: CustomerParams,
        hashed_password: String,
    ) -> Result<Option<Customer>, DbErr> {
        let Some(existing) = entity::prelude::Customer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::customer::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.hashed_password = ActiveValue::Set(hashed_password);
        active_model.payment_method = ActiveValue::Set(params.payment_method.as_i32());

        let entity = active_model.update(self.db).await?;

        Customer::from_entity(entity).map(Some)
    }
}
