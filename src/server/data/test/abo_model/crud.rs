use super::*;

/// Tests creating and reading back an abo model.
///
/// Expected: Ok with identical fields
#[tokio::test]
async fn creates_and_finds_abo_model() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AboModelRepository::new(db);
    let abo_model = AboModel {
        id: "premium".to_string(),
        special_drinks: true,
        price_per_week: 25,
        drink_allowance: 14,
    };

    let created = repo.create(abo_model.clone()).await?;
    let found = repo.find_by_id("premium").await?;

    assert_eq!(created, abo_model);
    assert_eq!(found, Some(abo_model));

    Ok(())
}

/// Tests listing abo models ordered by ID.
///
/// Expected: Ok with models sorted ascending
#[tokio::test]
async fn lists_abo_models_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::abo_model::AboModelFactory::new(db)
        .id("weekly")
        .build()
        .await?;
    factory::abo_model::AboModelFactory::new(db)
        .id("basic")
        .build()
        .await?;

    let ids: Vec<String> = AboModelRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(ids, vec!["basic", "weekly"]);

    Ok(())
}

/// Tests updating an existing abo model and a missing one.
///
/// Expected: Ok(Some) with new values, Ok(None) for the missing ID
#[tokio::test]
async fn updates_existing_abo_model_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_abo_model(db).await?;
    let repo = AboModelRepository::new(db);

    let updated = repo
        .update(AboModel {
            id: existing.id.clone(),
            special_drinks: true,
            price_per_week: 12,
            drink_allowance: 9,
        })
        .await?
        .unwrap();

    assert!(updated.special_drinks);
    assert_eq!(updated.price_per_week, 12);
    assert_eq!(updated.drink_allowance, 9);

    let missing = repo
        .update(AboModel {
            id: "missing".to_string(),
            special_drinks: false,
            price_per_week: 1,
            drink_allowance: 1,
        })
        .await?;

    assert!(missing.is_none());

    Ok(())
}

/// Tests that a stored negative price is reported instead of wrapping around.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_negative_stored_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let broken = factory::abo_model::AboModelFactory::new(db)
        .price_per_week(-1)
        .build()
        .await?;

    let result = AboModelRepository::new(db).find_by_id(&broken.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
