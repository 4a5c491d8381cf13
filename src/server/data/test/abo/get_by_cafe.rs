use super::*;

/// Tests listing abos scoped to a single café.
///
/// Expected: Ok with only the café's abos
#[tokio::test]
async fn returns_only_abos_of_cafe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (cafe, abo_model, _customer, abo) =
        factory::helpers::create_abo_with_dependencies(db).await?;
    let second_customer = factory::create_customer(db).await?;
    let second = factory::create_abo(db, &cafe.id, &abo_model.id, &second_customer.id).await?;
    factory::helpers::create_abo_with_dependencies(db).await?;

    let abos = AboRepository::new(db).get_by_cafe(&cafe.id).await?;

    assert_eq!(abos.len(), 2);
    assert!(abos.iter().any(|a| a.id == abo.id));
    assert!(abos.iter().any(|a| a.id == second.id));

    Ok(())
}

/// Tests finding the abo of a customer.
///
/// Expected: Some for the subscribed customer, None for another
#[tokio::test]
async fn finds_abo_by_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_cafe, _abo_model, customer, abo) =
        factory::helpers::create_abo_with_dependencies(db).await?;
    let other = factory::create_customer(db).await?;

    let repo = AboRepository::new(db);

    assert_eq!(repo.find_by_customer(&customer.id).await?.map(|a| a.id), Some(abo.id));
    assert!(repo.find_by_customer(&other.id).await?.is_none());

    Ok(())
}
