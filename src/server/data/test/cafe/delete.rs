use super::*;

/// Tests that deleting a café removes its employees, abo model links and abos.
///
/// The abo model itself and the customer remain.
///
/// Expected: Ok(true) with dependent rows gone
#[tokio::test]
async fn deletes_cafe_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_abo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (cafe, _abo_model, _customer, _abo) =
        factory::helpers::create_abo_with_dependencies(db).await?;
    factory::create_employee(db, &cafe.id).await?;

    let deleted = CafeRepository::new(db).delete(&cafe.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Cafe::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Employee::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CafeAboModel::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Abo::find().count(db).await?, 0);
    assert_eq!(entity::prelude::AboModel::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Customer::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a café that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_cafe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CafeRepository::new(db).delete("missing").await?;

    assert!(!deleted);

    Ok(())
}
