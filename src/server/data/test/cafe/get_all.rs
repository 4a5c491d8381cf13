use super::*;

/// Tests listing cafés ordered by ID with their own abo models only.
///
/// Expected: Ok with cafés sorted by ID and links grouped per café
#[tokio::test]
async fn returns_cafes_ordered_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zeta = factory::cafe::CafeFactory::new(db).id("zeta").build().await?;
    let alpha = factory::cafe::CafeFactory::new(db).id("alpha").build().await?;
    let abo_model = factory::create_abo_model(db).await?;
    factory::offer_abo_model(db, &zeta.id, &abo_model.id).await?;

    let cafes = CafeRepository::new(db).get_all().await?;

    assert_eq!(cafes.len(), 2);
    assert_eq!(cafes[0].id, alpha.id);
    assert!(cafes[0].abo_model_ids.is_empty());
    assert_eq!(cafes[1].id, zeta.id);
    assert_eq!(cafes[1].abo_model_ids, vec![abo_model.id]);

    Ok(())
}

/// Tests listing cafés on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list_without_cafes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafes = CafeRepository::new(db).get_all().await?;

    assert!(cafes.is_empty());

    Ok(())
}
