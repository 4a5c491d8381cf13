use super::*;

/// Tests deleting an abo model that an abo still uses.
///
/// Expected: Err(AppError::BadRequest) and the model kept
#[tokio::test]
async fn rejects_referenced_abo_model() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, abo_model, _, _) = factory::helpers::create_abo_with_dependencies(db).await?;
    let service = AboModelService::new(db);

    let result = service.delete(&abo_model.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_by_id(&abo_model.id).await.is_ok());

    Ok(())
}

/// Tests deleting an unused abo model.
///
/// Expected: Ok, then Err(AppError::NotFound) on a second delete
#[tokio::test]
async fn deletes_unused_abo_model() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let abo_model = factory::create_abo_model(db).await?;
    let service = AboModelService::new(db);

    service.delete(&abo_model.id).await?;
    let again = service.delete(&abo_model.id).await;

    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
