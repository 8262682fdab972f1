use super::*;

/// Tests that a range overlapping an existing reservation is detected.
///
/// Expected: Ok(Some) with the conflicting reservation
#[tokio::test]
async fn detects_overlapping_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;

    let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
    let existing = factory::reservation::ReservationFactory::new(db, renter.id, bateau.id)
        .date_debut(debut)
        .date_fin(fin)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflict = repo
        .find_overlapping(
            renter.id,
            bateau.id,
            debut + Duration::days(2),
            fin + Duration::days(2),
        )
        .await?;

    assert_eq!(conflict.map(|r| r.id), Some(existing.id));

    Ok(())
}

/// Tests the boundary case where the requested range starts exactly on the
/// end date of an existing reservation.
///
/// The overlap test is inclusive on both bounds, so touching ranges count
/// as a conflict.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn boundary_touching_range_counts_as_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;

    let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
    factory::reservation::ReservationFactory::new(db, renter.id, bateau.id)
        .date_debut(debut)
        .date_fin(fin)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflict = repo
        .find_overlapping(renter.id, bateau.id, fin, fin + Duration::days(3))
        .await?;

    assert!(conflict.is_some());

    Ok(())
}

/// Tests that a disjoint range is not reported as a conflict.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_disjoint_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;

    let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
    factory::reservation::ReservationFactory::new(db, renter.id, bateau.id)
        .date_debut(debut)
        .date_fin(fin)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflict = repo
        .find_overlapping(
            renter.id,
            bateau.id,
            fin + Duration::days(1),
            fin + Duration::days(4),
        )
        .await?;

    assert!(conflict.is_none());

    Ok(())
}

/// Tests that another renter's reservation on the same boat and dates is
/// not a conflict for this renter.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_renters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;
    let autre_renter = factory::create_utilisateur(db).await?;

    let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
    factory::reservation::ReservationFactory::new(db, autre_renter.id, bateau.id)
        .date_debut(debut)
        .date_fin(fin)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflict = repo
        .find_overlapping(renter.id, bateau.id, debut, fin)
        .await?;

    assert!(conflict.is_none());

    Ok(())
}

/// Tests that a reservation on another boat is not a conflict.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_boats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let autre_bateau = factory::create_bateau(db, proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;

    let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
    factory::reservation::ReservationFactory::new(db, renter.id, autre_bateau.id)
        .date_debut(debut)
        .date_fin(fin)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflict = repo
        .find_overlapping(renter.id, bateau.id, debut, fin)
        .await?;

    assert!(conflict.is_none());

    Ok(())
}
