use super::*;

/// Tests that updating a café replaces bank data and adds links while keeping existing ones.
///
/// Expected: Ok(Some) with new bank data and both abo models offered
#[tokio::test]
async fn updates_bank_data_and_adds_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (cafe, existing) = factory::helpers::create_cafe_offering_abo_model(db).await?;
    let added = factory::create_abo_model(db).await?;

    let new_details = validate_bank_details("GB82 WEST 1234 5698 7654 32", "NWBKGB2L").unwrap();

    let updated = CafeRepository::new(db)
        .update(UpdateCafeParams {
            id: cafe.id.clone(),
            bank_details: new_details,
            account_holder: "New Holder".to_string(),
            abo_model_ids: vec![added.id.clone(), existing.id.clone()],
        })
        .await?
        .unwrap();

    assert_eq!(updated.iban, "GB82WEST12345698765432");
    assert_eq!(updated.bic, "NWBKGB2L");
    assert_eq!(updated.account_holder, "New Holder");

    let mut expected = vec![existing.id, added.id];
    expected.sort();
    assert_eq!(updated.abo_model_ids, expected);

    Ok(())
}

/// Tests updating a café that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_cafe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CafeRepository::new(db)
        .update(UpdateCafeParams {
            id: "missing".to_string(),
            bank_details: bank_details(),
            account_holder: "Nobody".to_string(),
            abo_model_ids: vec![],
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
