use super::*;

/// Tests logging in with correct credentials.
///
/// Expected: Ok(Employee)
#[tokio::test]
async fn accepts_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let service = EmployeeService::new(db);
    service.create(params(&cafe.id, "mia")).await?;

    let employee = service.authenticate(&cafe.id, "mia", "espresso").await?;

    assert_eq!(employee.id, "mia");

    Ok(())
}

/// Tests that a wrong password, an unknown employee and an unknown café fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for all three
#[tokio::test]
async fn rejects_bad_credentials_uniformly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let service = EmployeeService::new(db);
    service.create(params(&cafe.id, "mia")).await?;

    let attempts = [
        (cafe.id.as_str(), "mia", "latte"),
        (cafe.id.as_str(), "noah", "espresso"),
        ("ghost", "mia", "espresso"),
    ];

    for (cafe_id, id, password) in attempts {
        let result = service.authenticate(cafe_id, id, password).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Tests that an updated password replaces the old one.
///
/// Expected: new password accepted, old password rejected
#[tokio::test]
async fn update_rehashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let service = EmployeeService::new(db);
    service.create(params(&cafe.id, "mia")).await?;

    let mut changed = params(&cafe.id, "mia");
    changed.password = "cortado".to_string();
    service.update(changed).await?;

    assert!(service.authenticate(&cafe.id, "mia", "cortado").await.is_ok());
    assert!(service
        .authenticate(&cafe.id, "mia", "espresso")
        .await
        .is_err());

    Ok(())
}
