use super::*;

/// Tests the `recus` direction filter.
#[tokio::test]
async fn filters_received_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moi = factory::create_utilisateur(db).await?;
    let autre = factory::create_utilisateur(db).await?;

    let recu = factory::create_message(db, autre.id, Some(moi.id)).await?;
    factory::create_message(db, moi.id, Some(autre.id)).await?;

    let repo = MessageRepository::new(db);
    let messages = repo
        .get_for_utilisateur(moi.id, DirectionMessage::Recus, 0, 20)
        .await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, recu.id);

    Ok(())
}

/// Tests the `envoyes` direction filter.
#[tokio::test]
async fn filters_sent_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moi = factory::create_utilisateur(db).await?;
    let autre = factory::create_utilisateur(db).await?;

    factory::create_message(db, autre.id, Some(moi.id)).await?;
    let envoye = factory::create_message(db, moi.id, Some(autre.id)).await?;

    let repo = MessageRepository::new(db);
    let messages = repo
        .get_for_utilisateur(moi.id, DirectionMessage::Envoyes, 0, 20)
        .await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, envoye.id);

    Ok(())
}

/// Tests that `all` returns both directions and pagination caps the page.
#[tokio::test]
async fn returns_both_directions_with_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Utilisateur)
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moi = factory::create_utilisateur(db).await?;
    let autre = factory::create_utilisateur(db).await?;

    factory::create_message(db, autre.id, Some(moi.id)).await?;
    factory::create_message(db, moi.id, Some(autre.id)).await?;
    factory::create_message(db, autre.id, Some(moi.id)).await?;

    let repo = MessageRepository::new(db);

    let all = repo
        .get_for_utilisateur(moi.id, DirectionMessage::All, 0, 20)
        .await?;
    assert_eq!(all.len(), 3);

    let page = repo
        .get_for_utilisateur(moi.id, DirectionMessage::All, 0, 2)
        .await?;
    assert_eq!(page.len(), 2);

    let rest = repo
        .get_for_utilisateur(moi.id, DirectionMessage::All, 2, 2)
        .await?;
    assert_eq!(rest.len(), 1);

    Ok(())
}
