use super::*;

/// Tests two sequential abo requests for the same customer against the database.
///
/// Expected: first Ok, second Err(AboError::CustomerAlreadySubscribed)
#[tokio::test]
async fn second_abo_for_customer_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (cafe, abo_model) = factory::helpers::create_cafe_offering_abo_model(db).await?;
    let customer = factory::create_customer(db).await?;
    let service = AboService::new(db);

    let request = CreateAboParams {
        cafe_id: cafe.id.clone(),
        abo_model_id: abo_model.id.clone(),
        customer_id: customer.id.clone(),
    };

    let first = service.create(&cafe.id, request.clone()).await?;
    let second = service.create(&cafe.id, request).await;

    assert_eq!(first.customer_id, customer.id);
    assert!(matches!(
        second,
        Err(AppError::AboErr(AboError::CustomerAlreadySubscribed(_)))
    ));
    assert_eq!(service.get_by_cafe(&cafe.id).await?.len(), 1);

    Ok(())
}

/// Tests that an existing abo model not linked to the café is reported as not offered.
///
/// Expected: Err(AboError::ModelNotOffered), not CafeNotFound
#[tokio::test]
async fn unlinked_model_is_not_offered() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let abo_model = factory::create_abo_model(db).await?;
    let customer = factory::create_customer(db).await?;

    let result = AboService::new(db)
        .create(
            &cafe.id,
            CreateAboParams {
                cafe_id: cafe.id.clone(),
                abo_model_id: abo_model.id,
                customer_id: customer.id,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AboErr(AboError::ModelNotOffered(_, _)))
    ));

    Ok(())
}

/// Tests that an abo for an unknown café is reported as such.
///
/// Expected: Err(AboError::CafeNotFound)
#[tokio::test]
async fn unknown_cafe_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AboService::new(db).create("ghost", params("ghost")).await;

    assert!(matches!(
        result,
        Err(AppError::AboErr(AboError::CafeNotFound(_)))
    ));

    Ok(())
}

/// Tests that an abo for an unknown customer is reported as not found.
///
/// Expected: Err(AppError::NotFound) and nothing stored
#[tokio::test]
async fn unknown_customer_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (cafe, abo_model) = factory::helpers::create_cafe_offering_abo_model(db).await?;
    let service = AboService::new(db);

    let result = service
        .create(
            &cafe.id,
            CreateAboParams {
                cafe_id: cafe.id.clone(),
                abo_model_id: abo_model.id,
                customer_id: "nobody".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_by_cafe(&cafe.id).await?.is_empty());

    Ok(())
}
