use super::*;

/// Tests that the same employee ID can exist in two cafés and lookups use both key parts.
///
/// Expected: each lookup returns the employee of the requested café
#[tokio::test]
async fn scopes_employee_ids_to_cafe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let north = factory::create_cafe(db).await?;
    let south = factory::create_cafe(db).await?;
    factory::employee::EmployeeFactory::new(db, &north.id)
        .id("anna")
        .name("Anna North")
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, &south.id)
        .id("anna")
        .name("Anna South")
        .sudo(true)
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);

    let in_north = repo.find_by_id(&north.id, "anna").await?.unwrap();
    let in_south = repo.find_by_id(&south.id, "anna").await?.unwrap();

    assert_eq!(in_north.name, "Anna North");
    assert!(!in_north.sudo);
    assert_eq!(in_south.name, "Anna South");
    assert!(in_south.sudo);

    Ok(())
}

/// Tests listing and counting employees of one café.
///
/// Expected: Ok with the café's employees ordered by ID
#[tokio::test]
async fn lists_employees_of_cafe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let other = factory::create_cafe(db).await?;
    factory::employee::EmployeeFactory::new(db, &cafe.id)
        .id("zoe")
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, &cafe.id)
        .id("ben")
        .build()
        .await?;
    factory::create_employee(db, &other.id).await?;

    let repo = EmployeeRepository::new(db);
    let ids: Vec<String> = repo
        .get_all_by_cafe(&cafe.id)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(ids, vec!["ben", "zoe"]);
    assert_eq!(repo.count_by_cafe(&cafe.id).await?, 2);
    assert_eq!(repo.count_by_cafe("missing").await?, 0);

    Ok(())
}

/// Tests replacing an employee's fields including the password hash.
///
/// Expected: Ok(Some) with new fields and stored hash replaced
#[tokio::test]
async fn updates_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let employee = factory::create_employee(db, &cafe.id).await?;

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(EmployeeRecord {
            cafe_id: cafe.id.clone(),
            id: employee.id.clone(),
            name: "Renamed".to_string(),
            hashed_password: "new-hash".to_string(),
            sudo: true,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.sudo);
    assert_eq!(
        repo.find_password_hash(&cafe.id, &employee.id).await?,
        Some("new-hash".to_string())
    );

    Ok(())
}

/// Tests that deleting only removes the employee of the given café.
///
/// Expected: Ok(true) once, Ok(false) afterwards, namesake in other café untouched
#[tokio::test]
async fn deletes_employee_of_cafe_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cafe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cafe = factory::create_cafe(db).await?;
    let other = factory::create_cafe(db).await?;
    factory::employee::EmployeeFactory::new(db, &cafe.id)
        .id("max")
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, &other.id)
        .id("max")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);

    assert!(repo.delete(&cafe.id, "max").await?);
    assert!(!repo.delete(&cafe.id, "max").await?);
    assert!(repo.find_by_id(&other.id, "max").await?.is_some());

    Ok(())
}
