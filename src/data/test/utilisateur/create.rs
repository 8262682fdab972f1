use super::*;

/// Tests account creation and the email lookup.
#[tokio::test]
async fn creates_account_and_finds_it_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UtilisateurRepository::new(db);
    let utilisateur = repo
        .create(CreateUtilisateurParams {
            nom: "Marin".to_string(),
            prenom: "Jean".to_string(),
            email: "jean.marin@example.com".to_string(),
            mot_de_passe: "$argon2id$fake-hash".to_string(),
            role: RoleUtilisateur::Client,
            telephone: None,
            adresse: None,
            photo_profil: None,
        })
        .await?;

    assert_eq!(utilisateur.role, RoleUtilisateur::Client);

    let found = repo.find_by_email("jean.marin@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(utilisateur.id));

    Ok(())
}

/// Tests the unique constraint on email.
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UtilisateurRepository::new(db);
    let params = || CreateUtilisateurParams {
        nom: "Marin".to_string(),
        prenom: "Jean".to_string(),
        email: "jean.marin@example.com".to_string(),
        mot_de_passe: "$argon2id$fake-hash".to_string(),
        role: RoleUtilisateur::Client,
        telephone: None,
        adresse: None,
        photo_profil: None,
    };

    repo.create(params()).await?;
    let second = repo.create(params()).await;

    assert!(second.is_err());

    Ok(())
}
