use super::*;

/// Tests that reservations are matched through the boat's owner.
#[tokio::test]
async fn returns_reservations_on_owned_boats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let autre_proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let autre_bateau = factory::create_bateau(db, autre_proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;

    let sur_mon_bateau = factory::create_reservation(db, renter.id, bateau.id).await?;
    factory::create_reservation(db, renter.id, autre_bateau.id).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_by_proprietaire(proprietaire.id).await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, sur_mon_bateau.id);

    Ok(())
}

/// Tests that an owner without bookings gets an empty list, not an error.
#[tokio::test]
async fn returns_empty_for_owner_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    factory::create_bateau(db, proprietaire.id).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_by_proprietaire(proprietaire.id).await?;

    assert!(reservations.is_empty());

    Ok(())
}
