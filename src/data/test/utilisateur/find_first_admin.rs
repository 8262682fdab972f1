use super::*;

/// Tests that an admin account is found when one exists.
#[tokio::test]
async fn finds_an_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_utilisateur(db).await?;
    let admin = factory::create_admin(db).await?;

    let repo = UtilisateurRepository::new(db);
    let found = repo.find_first_admin().await?;

    assert_eq!(found.map(|u| u.id), Some(admin.id));

    Ok(())
}

/// Tests that no admin yields None.
#[tokio::test]
async fn returns_none_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_utilisateur(db).await?;

    let repo = UtilisateurRepository::new(db);
    let found = repo.find_first_admin().await?;

    assert!(found.is_none());

    Ok(())
}
