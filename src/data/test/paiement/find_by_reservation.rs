use super::*;

/// Tests that the payment of a reservation is found.
#[tokio::test]
async fn finds_existing_paiement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paiement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;
    let reservation = factory::create_reservation(db, renter.id, bateau.id).await?;
    let paiement = factory::create_paiement(db, reservation.id).await?;

    let repo = PaiementRepository::new(db);
    let found = repo.find_by_reservation(reservation.id).await?;

    assert_eq!(found.map(|p| p.id), Some(paiement.id));

    Ok(())
}

/// Tests that a reservation without payment yields None.
#[tokio::test]
async fn returns_none_without_paiement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paiement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;
    let reservation = factory::create_reservation(db, renter.id, bateau.id).await?;

    let repo = PaiementRepository::new(db);
    let found = repo.find_by_reservation(reservation.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the unique constraint rejects a second payment row.
#[tokio::test]
async fn second_paiement_violates_unique_constraint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paiement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;
    let reservation = factory::create_reservation(db, renter.id, bateau.id).await?;
    factory::create_paiement(db, reservation.id).await?;

    let second = factory::create_paiement(db, reservation.id).await;

    assert!(second.is_err());

    Ok(())
}
