use super::*;

/// Tests registering a new customer.
///
/// Expected: Ok with a UUID, no drinks and paid up as of today
#[tokio::test]
async fn registers_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerService::new(db)
        .register(params("lena@example.com"))
        .await?;

    assert!(uuid::Uuid::parse_str(&customer.id).is_ok());
    assert_eq!(customer.drinks_drunk, 0);
    assert_eq!(customer.payment_method, PaymentMethod::PayPal);
    assert_eq!(customer.last_paid, chrono::Utc::now().date_naive());

    Ok(())
}

/// Tests registering two customers with the same email address.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CustomerService::new(db);

    service.register(params("lena@example.com")).await?;
    let result = service.register(params("lena@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a customer to another customer's email address.
///
/// Expected: Err(AppError::Conflict), while keeping their own address is allowed
#[tokio::test]
async fn update_rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CustomerService::new(db);

    service.register(params("lena@example.com")).await?;
    let other = service.register(params("jonas@example.com")).await?;

    let taken = service
        .update(&other.id, params("lena@example.com"))
        .await;
    let kept = service
        .update(&other.id, params("jonas@example.com"))
        .await?;

    assert!(matches!(taken, Err(AppError::Conflict(_))));
    assert_eq!(kept.email, "jonas@example.com");

    Ok(())
}

/// Tests looking up a customer that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_customer_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerService::new(db).overview("nobody").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests registering with a malformed email address.
///
/// Expected: Err(AppError::BadRequest) and no customer stored
#[tokio::test]
async fn rejects_malformed_email() -> Result<(), AppError> {
    use entity::prelude::Customer;
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerService::new(db)
        .register(params("not an email"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Customer::find().count(db).await?, 0);

    Ok(())
}

/// Tests that surrounding whitespace is trimmed from the email address.
///
/// Expected: Ok with the trimmed address stored
#[tokio::test]
async fn trims_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerService::new(db)
        .register(params(" lena@example.com "))
        .await?;

    assert_eq!(customer.email, "lena@example.com");

    Ok(())
}

/// Tests updating a customer to a malformed email address.
///
/// Expected: Err(AppError::BadRequest) and the stored address unchanged
#[tokio::test]
async fn update_rejects_malformed_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CustomerService::new(db);

    let customer = service.register(params("lena@example.com")).await?;
    let result = service.update(&customer.id, params("lena at example")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        service.overview(&customer.id).await?.email,
        "lena@example.com"
    );

    Ok(())
}
