use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        bateau::BateauRepository, contrat::ContratRepository, media::MediaRepository,
        paiement::PaiementRepository, recu::RecuRepository, reservation::ReservationRepository,
        utilisateur::UtilisateurRepository,
    },
    error::AppError,
    model::{
        reservation::{
            BateauAvecMediasDto, BateauSummaryDto, ContratAvecMediasDto, CreateReservationDto,
            PaiementAvecRecuDto, RecuAvecMediaDto, ReservationCompleteDto,
            ReservationUtilisateurDto, UpdateStatutReservationDto,
        },
        utilisateur::UtilisateurSummaryDto,
    },
    util::date::format_date_longue,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation and notifies the boat owner.
    ///
    /// Rejects the request with a Conflict when the same renter already has
    /// a reservation on the same boat over an overlapping date range (the
    /// overlap test is inclusive on both bounds). The boat and its owner are
    /// resolved before anything is written, so a missing boat can never
    /// leave a dangling reservation behind; the reservation row and the
    /// owner notification then commit in a single transaction.
    ///
    /// # Arguments
    /// - `dto`: Reservation request with optional price breakdown fields
    ///
    /// # Returns
    /// - `Ok(Model)`: The created reservation, lifecycle status EN_ATTENTE
    /// - `Err(AppError::Conflict)`: Overlapping reservation exists
    /// - `Err(AppError::NotFound)`: The boat does not exist
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        dto: CreateReservationDto,
    ) -> Result<entity::reservation::Model, AppError> {
        let repo = ReservationRepository::new(self.db);

        let existing = repo
            .find_overlapping(dto.utilisateur_id, dto.bateau_id, dto.date_debut, dto.date_fin)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "Vous avez déjà une réservation pour ce bateau à ces dates.".to_string(),
            ));
        }

        let bateau = BateauRepository::new(self.db)
            .find_by_id(dto.bateau_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Impossible de récupérer le bateau !".to_string())
            })?;

        let bateau_nom = dto.bateaunom.clone().unwrap_or_else(|| bateau.nom.clone());
        let contenu = format!(
            "Votre réservation du bateau \"{}\" du {} au {} a bien été enregistrée. \
             Veuillez procéder au paiement pour la confirmer.",
            bateau_nom,
            format_date_longue(dto.date_debut),
            format_date_longue(dto.date_fin)
        );
        let objet = format!("Confirmation de réservation - {}", bateau_nom);
        let proprietaire_id = bateau.proprietaire_id;

        let reservation = self
            .db
            .transaction::<_, entity::reservation::Model, DbErr>(move |txn| {
                Box::pin(async move {
                    let reservation = entity::reservation::ActiveModel {
                        utilisateur_id: ActiveValue::Set(dto.utilisateur_id),
                        bateau_id: ActiveValue::Set(dto.bateau_id),
                        date_debut: ActiveValue::Set(dto.date_debut),
                        date_fin: ActiveValue::Set(dto.date_fin),
                        statut: ActiveValue::Set(entity::enums::StatutReservation::EnAttente),
                        data: ActiveValue::Set(None),
                        plage: ActiveValue::Set(dto.plage),
                        nombre_de_passagers: ActiveValue::Set(dto.nombre_de_passagers),
                        supplement: ActiveValue::Set(dto.supplement),
                        heure: ActiveValue::Set(dto.heure),
                        prix_de_base: ActiveValue::Set(dto.prix_de_base.unwrap_or(0.0)),
                        prix_supplement_passagers: ActiveValue::Set(
                            dto.prix_supplement_passagers.unwrap_or(0.0),
                        ),
                        prix_options_payantes: ActiveValue::Set(
                            dto.prix_options_payantes.unwrap_or(0.0),
                        ),
                        total: ActiveValue::Set(dto.total.unwrap_or(0.0)),
                        montant_final: ActiveValue::Set(dto.montant_final.unwrap_or(0.0)),
                        commission: ActiveValue::Set(dto.commission.unwrap_or(0.0)),
                        cree_le: ActiveValue::Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    entity::message::ActiveModel {
                        expediteur_id: ActiveValue::Set(dto.utilisateur_id),
                        destinataire_id: ActiveValue::Set(Some(proprietaire_id)),
                        reservation_id: ActiveValue::Set(Some(reservation.id)),
                        bateau_id: ActiveValue::Set(None),
                        contenu: ActiveValue::Set(contenu),
                        objet: ActiveValue::Set(Some(objet)),
                        lu: ActiveValue::Set(false),
                        date_envoi: ActiveValue::Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    Ok(reservation)
                })
            })
            .await?;

        Ok(reservation)
    }

    /// Gets a renter's reservations with boat and renter summaries joined.
    ///
    /// # Arguments
    /// - `utilisateur_id`: Renter id
    ///
    /// # Returns
    /// - `Ok(Vec<ReservationUtilisateurDto>)`: Reservations, newest start first
    /// - `Err(AppError)`: Database error
    pub async fn get_for_utilisateur(
        &self,
        utilisateur_id: i32,
    ) -> Result<Vec<ReservationUtilisateurDto>, AppError> {
        let repo = ReservationRepository::new(self.db);
        let bateau_repo = BateauRepository::new(self.db);

        let utilisateur = UtilisateurRepository::new(self.db)
            .find_by_id(utilisateur_id)
            .await?
            .map(UtilisateurSummaryDto::from);

        let mut list = Vec::new();
        for reservation in repo.get_by_utilisateur(utilisateur_id).await? {
            let bateau = bateau_repo
                .find_by_id(reservation.bateau_id)
                .await?
                .map(BateauSummaryDto::from);

            list.push(ReservationUtilisateurDto {
                reservation,
                bateau,
                utilisateur: utilisateur.clone(),
            });
        }

        Ok(list)
    }

    /// Gets the reservations on an owner's boats with deep joins.
    ///
    /// Empty result is a valid outcome, not an error.
    pub async fn get_for_proprietaire(
        &self,
        proprietaire_id: i32,
    ) -> Result<Vec<ReservationCompleteDto>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_proprietaire(proprietaire_id)
            .await?;

        self.join_complete(reservations).await
    }

    /// Gets every reservation with deep joins (admin listing).
    pub async fn get_all(&self) -> Result<Vec<ReservationCompleteDto>, AppError> {
        let reservations = ReservationRepository::new(self.db).get_all().await?;

        self.join_complete(reservations).await
    }

    /// Updates the owner's free-form status text and notifies the renter.
    ///
    /// Touches the free-text `data` field, not the lifecycle enum. The
    /// status update and the notification message commit in a single
    /// transaction.
    ///
    /// # Arguments
    /// - `id`: Reservation id
    /// - `dto`: New status text and the acting owner's id
    ///
    /// # Returns
    /// - `Ok((reservation, message))`: Updated row and created notification
    /// - `Err(AppError::NotFound)`: The reservation does not exist
    /// - `Err(AppError)`: Database error
    pub async fn update_statut(
        &self,
        id: i32,
        dto: UpdateStatutReservationDto,
    ) -> Result<(entity::reservation::Model, entity::message::Model), AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation introuvable".to_string()))?;

        let statut_texte = dto.statusduproprietaire.replace('\0', "");
        let contenu = format!(
            "Le statut de votre réservation a été mis à jour : {}",
            statut_texte
        );
        let expediteur_id = dto.expediteur_id;

        let result = self
            .db
            .transaction::<_, (entity::reservation::Model, entity::message::Model), DbErr>(
                move |txn| {
                    Box::pin(async move {
                        let mut active_model: entity::reservation::ActiveModel =
                            reservation.into();
                        active_model.data = ActiveValue::Set(Some(statut_texte));
                        let updated = active_model.update(txn).await?;

                        let message = entity::message::ActiveModel {
                            expediteur_id: ActiveValue::Set(expediteur_id),
                            destinataire_id: ActiveValue::Set(Some(updated.utilisateur_id)),
                            reservation_id: ActiveValue::Set(Some(updated.id)),
                            bateau_id: ActiveValue::Set(Some(updated.bateau_id)),
                            contenu: ActiveValue::Set(contenu),
                            objet: ActiveValue::Set(Some(
                                "Mise à jour réservation".to_string(),
                            )),
                            lu: ActiveValue::Set(false),
                            date_envoi: ActiveValue::Set(Utc::now()),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;

                        Ok((updated, message))
                    })
                },
            )
            .await?;

        Ok(result)
    }

    /// Joins each reservation with its boat (medias, owner), renter,
    /// contract (medias) and payment (receipt, media).
    async fn join_complete(
        &self,
        reservations: Vec<entity::reservation::Model>,
    ) -> Result<Vec<ReservationCompleteDto>, AppError> {
        let bateau_repo = BateauRepository::new(self.db);
        let utilisateur_repo = UtilisateurRepository::new(self.db);
        let media_repo = MediaRepository::new(self.db);
        let contrat_repo = ContratRepository::new(self.db);
        let paiement_repo = PaiementRepository::new(self.db);
        let recu_repo = RecuRepository::new(self.db);

        let mut list = Vec::new();
        for reservation in reservations {
            let bateau = match bateau_repo.find_by_id(reservation.bateau_id).await? {
                Some(bateau) => {
                    let medias = media_repo.get_by_bateau(bateau.id).await?;
                    let proprietaire = utilisateur_repo
                        .find_by_id(bateau.proprietaire_id)
                        .await?
                        .map(UtilisateurSummaryDto::from);
                    Some(BateauAvecMediasDto {
                        bateau,
                        medias,
                        proprietaire,
                    })
                }
                None => None,
            };

            let utilisateur = utilisateur_repo
                .find_by_id(reservation.utilisateur_id)
                .await?
                .map(UtilisateurSummaryDto::from);

            let contrat = match contrat_repo.find_by_reservation(reservation.id).await? {
                Some(contrat) => {
                    let medias = media_repo.get_by_contrat(contrat.id).await?;
                    Some(ContratAvecMediasDto { contrat, medias })
                }
                None => None,
            };

            let paiement = match paiement_repo.find_by_reservation(reservation.id).await? {
                Some(paiement) => {
                    let recu = match recu_repo.find_by_paiement(paiement.id).await? {
                        Some(recu) => {
                            let media = media_repo.find_by_recu(recu.id).await?;
                            Some(RecuAvecMediaDto { recu, media })
                        }
                        None => None,
                    };
                    Some(PaiementAvecRecuDto { paiement, recu })
                }
                None => None,
            };

            list.push(ReservationCompleteDto {
                reservation,
                bateau,
                utilisateur,
                contrat,
                paiement,
            });
        }

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone};
    use entity::enums::StatutReservation;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn dto(
        utilisateur_id: i32,
        bateau_id: i32,
        date_debut: DateTime<Utc>,
        date_fin: DateTime<Utc>,
    ) -> CreateReservationDto {
        CreateReservationDto {
            utilisateur_id,
            bateau_id,
            date_debut,
            date_fin,
            bateaunom: None,
            plage: None,
            nombre_de_passagers: None,
            supplement: None,
            heure: None,
            prix_de_base: None,
            prix_supplement_passagers: None,
            prix_options_payantes: None,
            total: Some(1500.0),
            montant_final: None,
            commission: None,
        }
    }

    #[tokio::test]
    async fn creates_reservation_and_notifies_owner() {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let proprietaire = factory::create_proprietaire(db).await.unwrap();
        let bateau = factory::create_bateau(db, proprietaire.id).await.unwrap();
        let renter = factory::create_utilisateur(db).await.unwrap();

        let debut = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let fin = Utc.with_ymd_and_hms(2024, 6, 5, 10, 0, 0).unwrap();

        let service = ReservationService::new(db);
        let reservation = service
            .create(dto(renter.id, bateau.id, debut, fin))
            .await
            .unwrap();

        assert_eq!(reservation.statut, StatutReservation::EnAttente);
        assert_eq!(reservation.prix_de_base, 0.0);
        assert_eq!(reservation.total, 1500.0);

        let messages = entity::prelude::Message::find().all(db).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].destinataire_id, Some(proprietaire.id));
        assert_eq!(messages[0].expediteur_id, renter.id);
        assert_eq!(messages[0].reservation_id, Some(reservation.id));
        assert!(messages[0].contenu.contains("01 juin 2024"));
        assert!(messages[0].contenu.contains("05 juin 2024"));
    }

    #[tokio::test]
    async fn rejects_overlapping_reservation_without_writing() {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let proprietaire = factory::create_proprietaire(db).await.unwrap();
        let bateau = factory::create_bateau(db, proprietaire.id).await.unwrap();
        let renter = factory::create_utilisateur(db).await.unwrap();

        let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
        factory::reservation::ReservationFactory::new(db, renter.id, bateau.id)
            .date_debut(debut)
            .date_fin(fin)
            .build()
            .await
            .unwrap();

        let service = ReservationService::new(db);
        let result = service
            .create(dto(
                renter.id,
                bateau.id,
                debut + Duration::days(1),
                fin + Duration::days(1),
            ))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        let reservations = entity::prelude::Reservation::find().all(db).await.unwrap();
        assert_eq!(reservations.len(), 1);
        let messages = entity::prelude::Message::find().all(db).await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn boundary_start_on_existing_end_is_a_conflict() {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let proprietaire = factory::create_proprietaire(db).await.unwrap();
        let bateau = factory::create_bateau(db, proprietaire.id).await.unwrap();
        let renter = factory::create_utilisateur(db).await.unwrap();

        let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
        factory::reservation::ReservationFactory::new(db, renter.id, bateau.id)
            .date_debut(debut)
            .date_fin(fin)
            .build()
            .await
            .unwrap();

        let service = ReservationService::new(db);
        let result = service
            .create(dto(renter.id, bateau.id, fin, fin + Duration::days(4)))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn unknown_boat_writes_nothing() {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let renter = factory::create_utilisateur(db).await.unwrap();

        let debut = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let fin = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();

        let service = ReservationService::new(db);
        let result = service.create(dto(renter.id, 999, debut, fin)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        let reservations = entity::prelude::Reservation::find().all(db).await.unwrap();
        assert!(reservations.is_empty());
    }

    #[tokio::test]
    async fn update_statut_sets_text_and_notifies_renter() {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let proprietaire = factory::create_proprietaire(db).await.unwrap();
        let bateau = factory::create_bateau(db, proprietaire.id).await.unwrap();
        let renter = factory::create_utilisateur(db).await.unwrap();
        let reservation = factory::create_reservation(db, renter.id, bateau.id)
            .await
            .unwrap();

        let service = ReservationService::new(db);
        let (updated, message) = service
            .update_statut(
                reservation.id,
                UpdateStatutReservationDto {
                    statusduproprietaire: "Bateau prêt au ponton 4".to_string(),
                    expediteur_id: proprietaire.id,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.data.as_deref(), Some("Bateau prêt au ponton 4"));
        // The lifecycle enum is untouched by the free-form status.
        assert_eq!(updated.statut, StatutReservation::EnAttente);
        assert_eq!(message.destinataire_id, Some(renter.id));
        assert_eq!(message.expediteur_id, proprietaire.id);
        assert!(message.contenu.contains("Bateau prêt au ponton 4"));
    }

    #[tokio::test]
    async fn update_statut_unknown_reservation_is_not_found() {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ReservationService::new(db);
        let result = service
            .update_statut(
                42,
                UpdateStatutReservationDto {
                    statusduproprietaire: "peu importe".to_string(),
                    expediteur_id: 1,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
