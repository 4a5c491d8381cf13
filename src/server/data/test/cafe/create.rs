use super::*;

/// Tests creating a café that offers existing abo models.
///
/// Verifies that bank details are stored normalized and every listed abo model is linked.
///
/// Expected: Ok with café and sorted abo model IDs
#[tokio::test]
async fn creates_cafe_with_abo_models() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let weekly = factory::abo_model::AboModelFactory::new(db)
        .id("weekly")
        .build()
        .await?;
    let daily = factory::abo_model::AboModelFactory::new(db)
        .id("daily")
        .build()
        .await?;

    let repo = CafeRepository::new(db);
    let cafe = repo
        .create(CreateCafeParams {
            id: "Cafe_Aroma".to_string(),
            bank_details: bank_details(),
            account_holder: "Aroma GmbH".to_string(),
            abo_model_ids: vec![weekly.id.clone(), daily.id.clone()],
        })
        .await?;

    assert_eq!(cafe.id, "Cafe_Aroma");
    assert_eq!(cafe.iban, "DE89370400440532013000");
    assert_eq!(cafe.bic, "COBADEFFXXX");
    assert_eq!(cafe.abo_model_ids, vec!["daily", "weekly"]);

    Ok(())
}

/// Tests that unknown abo model IDs are skipped instead of failing the insert.
///
/// Expected: Ok with only the existing abo model linked
#[tokio::test]
async fn skips_unknown_abo_models() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let abo_model = factory::create_abo_model(db).await?;

    let repo = CafeRepository::new(db);
    let cafe = repo
        .create(CreateCafeParams {
            id: "Cafe_Nord".to_string(),
            bank_details: bank_details(),
            account_holder: "Nord".to_string(),
            abo_model_ids: vec!["missing".to_string(), abo_model.id.clone()],
        })
        .await?;

    assert_eq!(cafe.abo_model_ids, vec![abo_model.id]);

    let links = entity::prelude::CafeAboModel::find().count(db).await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests that listing the same abo model twice links it once.
///
/// Expected: Ok with a single link
#[tokio::test]
async fn links_repeated_abo_model_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let abo_model = factory::create_abo_model(db).await?;

    let repo = CafeRepository::new(db);
    let cafe = repo
        .create(CreateCafeParams {
            id: "Cafe_Twice".to_string(),
            bank_details: bank_details(),
            account_holder: "Twice".to_string(),
            abo_model_ids: vec![abo_model.id.clone(), abo_model.id.clone()],
        })
        .await?;

    assert_eq!(cafe.abo_model_ids.len(), 1);

    Ok(())
}

/// Tests inserting a café whose ID is already taken.
///
/// Expected: Err(DbErr) recognized as a unique violation
#[tokio::test]
async fn duplicate_id_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;

    let result = CafeRepository::new(db)
        .create(CreateCafeParams {
            id: cafe.id,
            bank_details: bank_details(),
            account_holder: "Someone else".to_string(),
            abo_model_ids: Vec::new(),
        })
        .await;

    let Err(err) = result else {
        panic!("expected duplicate café insert to fail");
    };
    assert!(crate::server::data::is_unique_violation(&err));

    Ok(())
}
