use chrono::{Duration, Utc};
use entity::enums::{RoleUtilisateur, StatutDemande};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, TransactionTrait,
};

use crate::{
    data::{
        demande::DemandeRepository,
        message::{CreateMessageParams, MessageRepository},
        utilisateur::UtilisateurRepository,
    },
    error::{demande::DemandeError, AppError},
    model::demande::DemandeAvecUtilisateurDto,
};

pub struct DemandeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemandeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a partnership request for a user.
    ///
    /// Enforces two independent limits before writing:
    /// - **daily**: at most one request per user per calendar day, checked
    ///   against today's date and backed by the unique index on
    ///   (utilisateur_id, date_demande);
    /// - **weekly**: the most recent request must be at least 7 days old
    ///   (rolling window, not calendar week). The error carries the first
    ///   admissible day so the client can display it.
    ///
    /// # Arguments
    /// - `utilisateur_id`: Requesting user
    /// - `payload`: Opaque JSON payload stored verbatim with the request
    ///
    /// # Returns
    /// - `Ok(Model)`: The created request, status EN_ATTENTE, dated today
    /// - `Err(AppError::DemandeErr)`: One of the limits is hit
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        utilisateur_id: i32,
        payload: String,
    ) -> Result<entity::demande_proprietaire::Model, AppError> {
        let repo = DemandeRepository::new(self.db);

        let today = Utc::now().date_naive();
        let seven_days_ago = today - Duration::days(7);

        if repo
            .find_by_utilisateur_and_date(utilisateur_id, today)
            .await?
            .is_some()
        {
            return Err(DemandeError::DailyLimit.into());
        }

        if let Some(last) = repo.find_latest_since(utilisateur_id, seven_days_ago).await? {
            return Err(DemandeError::WeeklyLimit {
                next_allowed: last.date_demande + Duration::days(7),
            }
            .into());
        }

        Ok(repo.create(utilisateur_id, payload, today).await?)
    }

    /// Notifies the platform administrator that a request was submitted.
    ///
    /// The first ADMIN user receives a confirmation message from the
    /// requester; selection among several admins is arbitrary.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created notification message
    /// - `Err(AppError::NotFound)`: No admin account exists
    /// - `Err(AppError)`: Database error
    pub async fn notify_admin(
        &self,
        utilisateur_id: i32,
    ) -> Result<entity::message::Model, AppError> {
        let admin = UtilisateurRepository::new(self.db)
            .find_first_admin()
            .await?
            .ok_or_else(|| AppError::NotFound("Aucun administrateur trouvé".to_string()))?;

        Ok(MessageRepository::new(self.db)
            .create(CreateMessageParams {
                expediteur_id: utilisateur_id,
                destinataire_id: Some(admin.id),
                reservation_id: None,
                bateau_id: None,
                contenu: "Un de nos experts a été notifié et vous contactera rapidement \
                          pour finaliser votre demande."
                    .to_string(),
                objet: Some("Demande enregistrée avec succès !".to_string()),
            })
            .await?)
    }

    /// Applies an admin decision to a request.
    ///
    /// ACCEPTEE promotes the requester to PROPRIETAIRE and sends a
    /// congratulation message; REFUSEE sends a rejection message; either
    /// way the request row gets the new status and a decision timestamp.
    /// All writes commit in a single transaction.
    ///
    /// The decision messages are sent by the platform admin account (the
    /// requester themselves when no admin exists, which keeps the sender
    /// column valid).
    ///
    /// # Arguments
    /// - `id`: Request id
    /// - `statut`: Raw status string, one of EN_ATTENTE / ACCEPTEE / REFUSEE
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated request
    /// - `Err(AppError::BadRequest)`: Unrecognized status value
    /// - `Err(AppError::NotFound)`: Unknown request
    /// - `Err(AppError)`: Database error
    pub async fn update_statut(
        &self,
        id: i32,
        statut: &str,
    ) -> Result<entity::demande_proprietaire::Model, AppError> {
        let nouveau_statut = match statut {
            "EN_ATTENTE" => StatutDemande::EnAttente,
            "ACCEPTEE" => StatutDemande::Acceptee,
            "REFUSEE" => StatutDemande::Refusee,
            _ => return Err(AppError::BadRequest("statut invalide".to_string())),
        };

        let demande = DemandeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Demande non trouvée".to_string()))?;

        let expediteur_id = UtilisateurRepository::new(self.db)
            .find_first_admin()
            .await?
            .map(|admin| admin.id)
            .unwrap_or(demande.utilisateur_id);

        let updated = self
            .db
            .transaction::<_, entity::demande_proprietaire::Model, DbErr>(move |txn| {
                Box::pin(async move {
                    match nouveau_statut {
                        StatutDemande::Acceptee => {
                            let utilisateur = entity::prelude::Utilisateur::find_by_id(
                                demande.utilisateur_id,
                            )
                            .one(txn)
                            .await?
                            .ok_or(DbErr::RecordNotFound(format!(
                                "Utilisateur {} not found",
                                demande.utilisateur_id
                            )))?;

                            let mut active_model: entity::utilisateur::ActiveModel =
                                utilisateur.into();
                            active_model.role =
                                ActiveValue::Set(RoleUtilisateur::Proprietaire);
                            active_model.update(txn).await?;

                            entity::message::ActiveModel {
                                expediteur_id: ActiveValue::Set(expediteur_id),
                                destinataire_id: ActiveValue::Set(Some(demande.utilisateur_id)),
                                contenu: ActiveValue::Set(
                                    "Votre demande a été acceptée, vous êtes maintenant \
                                     PROPRIETAIRE."
                                        .to_string(),
                                ),
                                objet: ActiveValue::Set(Some("Demande acceptée".to_string())),
                                lu: ActiveValue::Set(false),
                                date_envoi: ActiveValue::Set(Utc::now()),
                                ..Default::default()
                            }
                            .insert(txn)
                            .await?;
                        }
                        StatutDemande::Refusee => {
                            entity::message::ActiveModel {
                                expediteur_id: ActiveValue::Set(expediteur_id),
                                destinataire_id: ActiveValue::Set(Some(demande.utilisateur_id)),
                                contenu: ActiveValue::Set(
                                    "Votre demande a été refusée.".to_string(),
                                ),
                                objet: ActiveValue::Set(Some("Demande refusée".to_string())),
                                lu: ActiveValue::Set(false),
                                date_envoi: ActiveValue::Set(Utc::now()),
                                ..Default::default()
                            }
                            .insert(txn)
                            .await?;
                        }
                        StatutDemande::EnAttente => {}
                    }

                    let mut active_model: entity::demande_proprietaire::ActiveModel =
                        demande.into();
                    active_model.statut = ActiveValue::Set(nouveau_statut);
                    active_model.date_traitement = ActiveValue::Set(Some(Utc::now()));
                    active_model.update(txn).await
                })
            })
            .await?;

        Ok(updated)
    }

    /// Gets every request with its author joined (admin listing).
    pub async fn get_all(&self) -> Result<Vec<DemandeAvecUtilisateurDto>, AppError> {
        let rows = DemandeRepository::new(self.db)
            .get_all_with_utilisateur()
            .await?;

        Ok(rows
            .into_iter()
            .map(|(demande, utilisateur)| DemandeAvecUtilisateurDto {
                demande,
                utilisateur,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_pending_demande_dated_today() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let utilisateur = factory::create_utilisateur(db).await.unwrap();

        let service = DemandeService::new(db);
        let demande = service
            .create(utilisateur.id, "{\"nomComplet\":\"Jean Marin\"}".to_string())
            .await
            .unwrap();

        assert_eq!(demande.statut, StatutDemande::EnAttente);
        assert_eq!(demande.date_demande, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn second_request_same_day_hits_daily_limit() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let utilisateur = factory::create_utilisateur(db).await.unwrap();

        let service = DemandeService::new(db);
        service
            .create(utilisateur.id, "{}".to_string())
            .await
            .unwrap();

        let result = service.create(utilisateur.id, "{}".to_string()).await;

        assert!(matches!(
            result,
            Err(AppError::DemandeErr(DemandeError::DailyLimit))
        ));
    }

    #[tokio::test]
    async fn recent_request_hits_weekly_limit_with_next_date() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let utilisateur = factory::create_utilisateur(db).await.unwrap();
        let il_y_a_trois_jours = Utc::now().date_naive() - Duration::days(3);
        factory::demande::DemandeFactory::new(db, utilisateur.id)
            .date_demande(il_y_a_trois_jours)
            .build()
            .await
            .unwrap();

        let service = DemandeService::new(db);
        let result = service.create(utilisateur.id, "{}".to_string()).await;

        match result {
            Err(AppError::DemandeErr(DemandeError::WeeklyLimit { next_allowed })) => {
                assert_eq!(next_allowed, il_y_a_trois_jours + Duration::days(7));
            }
            other => panic!("expected WeeklyLimit, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn eight_day_old_request_does_not_limit() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let utilisateur = factory::create_utilisateur(db).await.unwrap();
        factory::demande::DemandeFactory::new(db, utilisateur.id)
            .date_demande(Utc::now().date_naive() - Duration::days(8))
            .build()
            .await
            .unwrap();

        let service = DemandeService::new(db);
        let result = service.create(utilisateur.id, "{}".to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn notify_admin_requires_an_admin_account() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let utilisateur = factory::create_utilisateur(db).await.unwrap();

        let service = DemandeService::new(db);
        let result = service.notify_admin(utilisateur.id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn notify_admin_messages_the_admin() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let utilisateur = factory::create_utilisateur(db).await.unwrap();
        let admin = factory::create_admin(db).await.unwrap();

        let service = DemandeService::new(db);
        let message = service.notify_admin(utilisateur.id).await.unwrap();

        assert_eq!(message.destinataire_id, Some(admin.id));
        assert_eq!(message.expediteur_id, utilisateur.id);
        assert_eq!(
            message.objet.as_deref(),
            Some("Demande enregistrée avec succès !")
        );
    }

    #[tokio::test]
    async fn acceptation_promotes_requester_and_notifies() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::create_admin(db).await.unwrap();
        let utilisateur = factory::create_utilisateur(db).await.unwrap();
        assert_eq!(utilisateur.role, RoleUtilisateur::Client);
        let demande = factory::create_demande(db, utilisateur.id).await.unwrap();

        let service = DemandeService::new(db);
        let updated = service.update_statut(demande.id, "ACCEPTEE").await.unwrap();

        assert_eq!(updated.statut, StatutDemande::Acceptee);
        assert!(updated.date_traitement.is_some());

        let utilisateur = entity::prelude::Utilisateur::find_by_id(utilisateur.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(utilisateur.role, RoleUtilisateur::Proprietaire);

        let messages = entity::prelude::Message::find().all(db).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].destinataire_id, Some(utilisateur.id));
        assert_eq!(messages[0].expediteur_id, admin.id);
        assert_eq!(messages[0].objet.as_deref(), Some("Demande acceptée"));
    }

    #[tokio::test]
    async fn refusal_notifies_without_promotion() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_admin(db).await.unwrap();
        let utilisateur = factory::create_utilisateur(db).await.unwrap();
        let demande = factory::create_demande(db, utilisateur.id).await.unwrap();

        let service = DemandeService::new(db);
        let updated = service.update_statut(demande.id, "REFUSEE").await.unwrap();

        assert_eq!(updated.statut, StatutDemande::Refusee);

        let utilisateur = entity::prelude::Utilisateur::find_by_id(utilisateur.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(utilisateur.role, RoleUtilisateur::Client);

        let messages = entity::prelude::Message::find().all(db).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].objet.as_deref(), Some("Demande refusée"));
    }

    #[tokio::test]
    async fn rejects_unknown_statut_value() {
        let test = TestBuilder::new()
            .with_demande_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let utilisateur = factory::create_utilisateur(db).await.unwrap();
        let demande = factory::create_demande(db, utilisateur.id).await.unwrap();

        let service = DemandeService::new(db);
        let result = service.update_statut(demande.id, "ANNULEE").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
