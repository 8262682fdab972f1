use sea_orm::DatabaseConnection;

use crate::{
    data::{
        bateau::BateauRepository,
        message::{CreateMessageParams, DirectionMessage, MessageRepository},
        reservation::ReservationRepository,
        utilisateur::UtilisateurRepository,
    },
    error::AppError,
    model::{
        message::{CreateMessageDto, MessageCompletDto},
        utilisateur::UtilisateurSummaryDto,
    },
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's messages with correspondents and linked rows joined.
    ///
    /// # Arguments
    /// - `utilisateur_id`: The user whose mailbox is read
    /// - `direction`: Received, sent, or both
    /// - `skip` / `take`: Offset/limit pagination (take defaults upstream)
    ///
    /// # Returns
    /// - `Ok(Vec<MessageCompletDto>)`: Messages, newest first
    /// - `Err(AppError)`: Database error
    pub async fn get_for_utilisateur(
        &self,
        utilisateur_id: i32,
        direction: DirectionMessage,
        skip: u64,
        take: u64,
    ) -> Result<Vec<MessageCompletDto>, AppError> {
        let messages = MessageRepository::new(self.db)
            .get_for_utilisateur(utilisateur_id, direction, skip, take)
            .await?;

        self.join_relations(messages).await
    }

    /// Marks a message as read on behalf of the acting user.
    ///
    /// Only the recipient may flip the read flag; the operation is
    /// idempotent for an already-read message.
    ///
    /// # Returns
    /// - `Ok(Model)`: The (possibly unchanged) message
    /// - `Err(AppError::NotFound)`: Unknown message
    /// - `Err(AppError::Forbidden)`: Acting user is not the recipient
    /// - `Err(AppError)`: Database error
    pub async fn mark_as_read(
        &self,
        message_id: i32,
        utilisateur_id: i32,
    ) -> Result<entity::message::Model, AppError> {
        let repo = MessageRepository::new(self.db);

        let message = repo
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message introuvable".to_string()))?;

        if message.destinataire_id != Some(utilisateur_id) {
            return Err(AppError::Forbidden(
                "Accès interdit : vous n'êtes pas le destinataire".to_string(),
            ));
        }

        Ok(repo.mark_as_read(message_id).await?)
    }

    /// Creates a direct message.
    ///
    /// # Arguments
    /// - `expediteur_id`: Sender id
    /// - `dto`: Recipient, body and optional linked rows
    ///
    /// # Returns
    /// - `Ok(Model)`: The created message
    /// - `Err(AppError::BadRequest)`: Empty body
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        expediteur_id: i32,
        dto: CreateMessageDto,
    ) -> Result<entity::message::Model, AppError> {
        if dto.contenu.trim().is_empty() {
            return Err(AppError::BadRequest(
                "expediteurId et contenu sont requis".to_string(),
            ));
        }

        Ok(MessageRepository::new(self.db)
            .create(CreateMessageParams {
                expediteur_id,
                destinataire_id: dto.destinataire_id,
                reservation_id: dto.reservation_id,
                bateau_id: dto.bateau_id,
                contenu: dto.contenu.replace('\0', ""),
                objet: dto.objet,
            })
            .await?)
    }

    /// Gets every message with joins (admin listing).
    pub async fn get_all(&self) -> Result<Vec<MessageCompletDto>, AppError> {
        let messages = MessageRepository::new(self.db).get_all().await?;

        self.join_relations(messages).await
    }

    async fn join_relations(
        &self,
        messages: Vec<entity::message::Model>,
    ) -> Result<Vec<MessageCompletDto>, AppError> {
        let utilisateur_repo = UtilisateurRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);
        let bateau_repo = BateauRepository::new(self.db);

        let mut list = Vec::new();
        for message in messages {
            let expediteur = utilisateur_repo
                .find_by_id(message.expediteur_id)
                .await?
                .map(UtilisateurSummaryDto::from);

            let destinataire = match message.destinataire_id {
                Some(id) => utilisateur_repo
                    .find_by_id(id)
                    .await?
                    .map(UtilisateurSummaryDto::from),
                None => None,
            };

            let reservation = match message.reservation_id {
                Some(id) => reservation_repo.find_by_id(id).await?,
                None => None,
            };

            let bateau = match message.bateau_id {
                Some(id) => bateau_repo.find_by_id(id).await?,
                None => None,
            };

            list.push(MessageCompletDto {
                message,
                expediteur,
                destinataire,
                reservation,
                bateau,
            });
        }

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn only_the_recipient_may_mark_as_read() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Utilisateur)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let expediteur = factory::create_utilisateur(db).await.unwrap();
        let destinataire = factory::create_utilisateur(db).await.unwrap();
        let message = factory::create_message(db, expediteur.id, Some(destinataire.id))
            .await
            .unwrap();

        let service = MessageService::new(db);

        // The sender is not the recipient.
        let result = service.mark_as_read(message.id, expediteur.id).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let updated = service
            .mark_as_read(message.id, destinataire.id)
            .await
            .unwrap();
        assert!(updated.lu);
    }

    #[tokio::test]
    async fn marking_twice_leaves_state_unchanged() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Utilisateur)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let expediteur = factory::create_utilisateur(db).await.unwrap();
        let destinataire = factory::create_utilisateur(db).await.unwrap();
        let message = factory::create_message(db, expediteur.id, Some(destinataire.id))
            .await
            .unwrap();

        let service = MessageService::new(db);
        let first = service
            .mark_as_read(message.id, destinataire.id)
            .await
            .unwrap();
        let second = service
            .mark_as_read(message.id, destinataire.id)
            .await
            .unwrap();

        assert!(first.lu);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn create_rejects_empty_body() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Utilisateur)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let expediteur = factory::create_utilisateur(db).await.unwrap();

        let service = MessageService::new(db);
        let result = service
            .create(
                expediteur.id,
                CreateMessageDto {
                    destinataire_id: None,
                    contenu: "   ".to_string(),
                    objet: None,
                    reservation_id: None,
                    bateau_id: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn create_strips_null_bytes() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Utilisateur)
            .with_table(entity::prelude::Message)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let expediteur = factory::create_utilisateur(db).await.unwrap();
        let destinataire = factory::create_utilisateur(db).await.unwrap();

        let service = MessageService::new(db);
        let message = service
            .create(
                expediteur.id,
                CreateMessageDto {
                    destinataire_id: Some(destinataire.id),
                    contenu: "Bonjour\0 à bord".to_string(),
                    objet: Some("Question".to_string()),
                    reservation_id: None,
                    bateau_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(message.contenu, "Bonjour à bord");
        assert!(!message.lu);
    }
}
