use super::*;
use entity::enums::StatutDemande;

/// Tests that a request row is created pending and dated on the given day.
#[tokio::test]
async fn creates_pending_demande() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_demande_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let utilisateur = factory::create_utilisateur(db).await?;
    let today = Utc::now().date_naive();

    let repo = DemandeRepository::new(db);
    let demande = repo
        .create(utilisateur.id, "{\"nomComplet\":\"Jean Marin\"}".to_string(), today)
        .await?;

    assert_eq!(demande.utilisateur_id, utilisateur.id);
    assert_eq!(demande.date_demande, today);
    assert_eq!(demande.statut, StatutDemande::EnAttente);
    assert!(demande.date_traitement.is_none());

    Ok(())
}

/// Tests that the same-day lookup sees the created row.
#[tokio::test]
async fn same_day_lookup_finds_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_demande_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let utilisateur = factory::create_utilisateur(db).await?;
    let today = Utc::now().date_naive();

    let repo = DemandeRepository::new(db);
    let demande = repo.create(utilisateur.id, "{}".to_string(), today).await?;

    let found = repo
        .find_by_utilisateur_and_date(utilisateur.id, today)
        .await?;
    assert_eq!(found.map(|d| d.id), Some(demande.id));

    let none = repo
        .find_by_utilisateur_and_date(utilisateur.id, today - Duration::days(1))
        .await?;
    assert!(none.is_none());

    Ok(())
}
