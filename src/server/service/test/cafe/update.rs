use super::*;

/// Tests updating a café's bank details and adding an abo model.
///
/// Expected: Ok with new details and both abo models offered
#[tokio::test]
async fn replaces_details_and_adds_models() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (cafe, first) = factory::helpers::create_cafe_offering_abo_model(db).await?;
    let second = factory::create_abo_model(db).await?;

    let updated = CafeService::new(db)
        .update(
            &cafe.id,
            "GB82 WEST 1234 5698 7654 32",
            "NWBKGB2L",
            "New Holder".to_string(),
            vec![second.id.clone()],
        )
        .await?;

    let mut expected = vec![first.id, second.id];
    expected.sort();

    assert_eq!(updated.iban, "GB82WEST12345698765432");
    assert_eq!(updated.bic, "NWBKGB2L");
    assert_eq!(updated.account_holder, "New Holder");
    assert_eq!(updated.abo_model_ids, expected);

    Ok(())
}

/// Tests that invalid bank details leave the café unchanged.
///
/// Expected: Err(BankDetailsError::IbanFormat) and original IBAN kept
#[tokio::test]
async fn invalid_details_leave_cafe_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let service = CafeService::new(db);

    let result = service
        .update(&cafe.id, "XX", BIC, "New Holder".to_string(), Vec::new())
        .await;

    assert!(matches!(
        result,
        Err(AppError::BankErr(BankDetailsError::IbanFormat))
    ));
    assert_eq!(service.get_by_id(&cafe.id).await?.iban, cafe.iban);

    Ok(())
}

/// Tests updating and deleting a café that doesn't exist.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn unknown_cafe_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CafeService::new(db);

    let update = service
        .update("ghost", IBAN, BIC, "Nobody".to_string(), Vec::new())
        .await;
    let delete = service.delete("ghost").await;

    assert!(matches!(update, Err(AppError::NotFound(_))));
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    Ok(())
}
