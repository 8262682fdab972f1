use super::*;

/// Tests that the most recent request inside the window is returned.
#[tokio::test]
async fn returns_most_recent_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_demande_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let utilisateur = factory::create_utilisateur(db).await?;
    let today = Utc::now().date_naive();

    factory::demande::DemandeFactory::new(db, utilisateur.id)
        .date_demande(today - Duration::days(6))
        .build()
        .await?;
    let recente = factory::demande::DemandeFactory::new(db, utilisateur.id)
        .date_demande(today - Duration::days(3))
        .build()
        .await?;

    let repo = DemandeRepository::new(db);
    let found = repo
        .find_latest_since(utilisateur.id, today - Duration::days(7))
        .await?;

    assert_eq!(found.map(|d| d.id), Some(recente.id));

    Ok(())
}

/// Tests that requests older than the window are ignored.
#[tokio::test]
async fn ignores_requests_older_than_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_demande_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let utilisateur = factory::create_utilisateur(db).await?;
    let today = Utc::now().date_naive();

    factory::demande::DemandeFactory::new(db, utilisateur.id)
        .date_demande(today - Duration::days(10))
        .build()
        .await?;

    let repo = DemandeRepository::new(db);
    let found = repo
        .find_latest_since(utilisateur.id, today - Duration::days(7))
        .await?;

    assert!(found.is_none());

    Ok(())
}
