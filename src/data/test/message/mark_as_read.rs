use super::*;

/// Tests that the read flag flips to true.
#[tokio::test]
async fn flips_read_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moi = factory::create_utilisateur(db).await?;
    let autre = factory::create_utilisateur(db).await?;
    let message = factory::create_message(db, autre.id, Some(moi.id)).await?;
    assert!(!message.lu);

    let repo = MessageRepository::new(db);
    let updated = repo.mark_as_read(message.id).await?;

    assert!(updated.lu);

    Ok(())
}

/// Tests that re-marking an already-read message succeeds unchanged.
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moi = factory::create_utilisateur(db).await?;
    let autre = factory::create_utilisateur(db).await?;
    let message = factory::create_message(db, autre.id, Some(moi.id)).await?;

    let repo = MessageRepository::new(db);
    let first = repo.mark_as_read(message.id).await?;
    let second = repo.mark_as_read(message.id).await?;

    assert!(first.lu);
    assert_eq!(first, second);

    Ok(())
}
