use super::*;

/// Tests that only the renter's reservations are returned, newest start
/// date first.
#[tokio::test]
async fn returns_renter_reservations_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;
    let autre = factory::create_utilisateur(db).await?;

    let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let ancienne = factory::reservation::ReservationFactory::new(db, renter.id, bateau.id)
        .date_debut(base)
        .date_fin(base + Duration::days(2))
        .build()
        .await?;
    let recente = factory::reservation::ReservationFactory::new(db, renter.id, bateau.id)
        .date_debut(base + Duration::days(30))
        .date_fin(base + Duration::days(32))
        .build()
        .await?;
    factory::create_reservation(db, autre.id, bateau.id).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_by_utilisateur(renter.id).await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, recente.id);
    assert_eq!(reservations[1].id, ancienne.id);

    Ok(())
}

/// Tests that a renter without reservations gets an empty list.
#[tokio::test]
async fn returns_empty_for_renter_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let renter = factory::create_utilisateur(db).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_by_utilisateur(renter.id).await?;

    assert!(reservations.is_empty());

    Ok(())
}
