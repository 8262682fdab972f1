use super::*;

/// Tests that payments are matched through the reservation → boat chain.
#[tokio::test]
async fn returns_paiements_on_owned_boats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paiement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let proprietaire = factory::create_proprietaire(db).await?;
    let autre_proprietaire = factory::create_proprietaire(db).await?;
    let bateau = factory::create_bateau(db, proprietaire.id).await?;
    let autre_bateau = factory::create_bateau(db, autre_proprietaire.id).await?;
    let renter = factory::create_utilisateur(db).await?;

    let ma_reservation = factory::create_reservation(db, renter.id, bateau.id).await?;
    let autre_reservation = factory::create_reservation(db, renter.id, autre_bateau.id).await?;
    let mon_paiement = factory::create_paiement(db, ma_reservation.id).await?;
    factory::create_paiement(db, autre_reservation.id).await?;

    let repo = PaiementRepository::new(db);
    let paiements = repo.get_by_proprietaire(proprietaire.id).await?;

    assert_eq!(paiements.len(), 1);
    assert_eq!(paiements[0].id, mon_paiement.id);

    Ok(())
}
