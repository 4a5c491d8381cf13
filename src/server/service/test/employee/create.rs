use super::*;

/// Tests creating the first employee of a café.
///
/// Expected: Ok, and the café no longer counts as having no employees
#[tokio::test]
async fn creates_employee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let service = EmployeeService::new(db);

    assert!(service.cafe_has_no_employees(&cafe.id).await?);

    let employee = service.create(params(&cafe.id, "mia")).await?;

    assert_eq!(employee.id, "mia");
    assert_eq!(employee.cafe_id, cafe.id);
    assert!(!service.cafe_has_no_employees(&cafe.id).await?);

    Ok(())
}

/// Tests that the stored password is a hash, not the plaintext.
///
/// Expected: stored value differs from the password and is a PHC string
#[tokio::test]
async fn stores_hashed_password() -> Result<(), AppError> {
    use entity::prelude::Employee;
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    EmployeeService::new(db)
        .create(params(&cafe.id, "mia"))
        .await?;

    let stored = Employee::find_by_id(("mia".to_string(), cafe.id.clone()))
        .one(db)
        .await?
        .unwrap();

    assert_ne!(stored.hashed_password, "espresso");
    assert!(stored.hashed_password.starts_with("$argon2"));

    Ok(())
}

/// Tests creating an employee twice in the same café.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_employee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let service = EmployeeService::new(db);

    service.create(params(&cafe.id, "mia")).await?;
    let result = service.create(params(&cafe.id, "mia")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that the same employee ID may exist in two cafés.
///
/// Expected: Ok for both
#[tokio::test]
async fn same_id_in_different_cafes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_cafe(db).await?;
    let second = factory::create_cafe(db).await?;
    let service = EmployeeService::new(db);

    service.create(params(&first.id, "mia")).await?;
    service.create(params(&second.id, "mia")).await?;

    assert_eq!(service.get_all_by_cafe(&second.id).await?.len(), 1);

    Ok(())
}

/// Tests creating an employee for a café that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_cafe() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EmployeeService::new(db).create(params("ghost", "mia")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
