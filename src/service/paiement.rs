use chrono::Utc;
use entity::enums::{EtatPaiement, StatutReservation};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        bateau::BateauRepository, paiement::PaiementRepository,
        reservation::ReservationRepository, utilisateur::UtilisateurRepository,
    },
    error::AppError,
    model::{
        paiement::{CreatePaiementDto, PaiementCompletDto, PaiementReservationDto},
        utilisateur::UtilisateurSummaryDto,
    },
};

pub struct PaiementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaiementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the payment of a reservation.
    ///
    /// Validates in order: the reservation exists (404), no payment was
    /// already recorded for it (409), and the settlement state is a
    /// recognized enum value (400). The payment row, the lifecycle flip to
    /// CONFIRMEE (when the state is PAYE) and the confirmation message all
    /// commit in a single transaction — a failure on any write leaves
    /// nothing behind.
    ///
    /// # Arguments
    /// - `dto`: Payment fields with the raw settlement state string
    ///
    /// # Returns
    /// - `Ok(Model)`: The created payment
    /// - `Err(AppError::NotFound)`: Unknown reservation
    /// - `Err(AppError::Conflict)`: A payment already exists
    /// - `Err(AppError::BadRequest)`: Unrecognized settlement state
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        dto: CreatePaiementDto,
    ) -> Result<entity::paiement::Model, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(dto.reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation introuvable".to_string()))?;

        let existing = PaiementRepository::new(self.db)
            .find_by_reservation(dto.reservation_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "Paiement déjà enregistré pour cette réservation".to_string(),
            ));
        }

        let etat = match dto.etat_paiement.as_str() {
            "PAYE" => EtatPaiement::Paye,
            "EN_ATTENTE" => EtatPaiement::EnAttente,
            "ECHEC" => EtatPaiement::Echec,
            _ => return Err(AppError::BadRequest("etatPaiement invalide".to_string())),
        };

        // The confirmation message goes to the boat owner.
        let destinataire_id = BateauRepository::new(self.db)
            .find_by_id(reservation.bateau_id)
            .await?
            .map(|bateau| bateau.proprietaire_id);

        let contenu = format!("Le paiement de {} € a été confirmé.", dto.montant_total);

        let paiement = self
            .db
            .transaction::<_, entity::paiement::Model, DbErr>(move |txn| {
                Box::pin(async move {
                    let paiement = entity::paiement::ActiveModel {
                        reservation_id: ActiveValue::Set(dto.reservation_id),
                        montant: ActiveValue::Set(dto.montant),
                        montant_total: ActiveValue::Set(dto.montant_total),
                        methode_paiement: ActiveValue::Set(dto.methode_paiement),
                        pourcentage_stripe: ActiveValue::Set(dto.pourcentage_stripe),
                        etat_paiement: ActiveValue::Set(etat.clone()),
                        cree_le: ActiveValue::Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    if etat == EtatPaiement::Paye {
                        let mut active_model: entity::reservation::ActiveModel =
                            reservation.clone().into();
                        active_model.statut = ActiveValue::Set(StatutReservation::Confirmee);
                        active_model.update(txn).await?;
                    }

                    entity::message::ActiveModel {
                        expediteur_id: ActiveValue::Set(reservation.utilisateur_id),
                        destinataire_id: ActiveValue::Set(destinataire_id),
                        reservation_id: ActiveValue::Set(Some(reservation.id)),
                        bateau_id: ActiveValue::Set(Some(reservation.bateau_id)),
                        contenu: ActiveValue::Set(contenu),
                        objet: ActiveValue::Set(Some("Confirmation de paiement".to_string())),
                        lu: ActiveValue::Set(false),
                        date_envoi: ActiveValue::Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    Ok(paiement)
                })
            })
            .await?;

        Ok(paiement)
    }

    /// Gets every payment with its reservation chain joined (admin listing).
    pub async fn get_all(&self) -> Result<Vec<PaiementCompletDto>, AppError> {
        let paiements = PaiementRepository::new(self.db).get_all().await?;
        self.join_reservations(paiements).await
    }

    /// Gets the payments received on an owner's boats.
    pub async fn get_for_proprietaire(
        &self,
        proprietaire_id: i32,
    ) -> Result<Vec<PaiementCompletDto>, AppError> {
        let paiements = PaiementRepository::new(self.db)
            .get_by_proprietaire(proprietaire_id)
            .await?;
        self.join_reservations(paiements).await
    }

    async fn join_reservations(
        &self,
        paiements: Vec<entity::paiement::Model>,
    ) -> Result<Vec<PaiementCompletDto>, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let bateau_repo = BateauRepository::new(self.db);
        let utilisateur_repo = UtilisateurRepository::new(self.db);

        let mut list = Vec::new();
        for paiement in paiements {
            let reservation = match reservation_repo.find_by_id(paiement.reservation_id).await? {
                Some(reservation) => {
                    let utilisateur = utilisateur_repo
                        .find_by_id(reservation.utilisateur_id)
                        .await?
                        .map(UtilisateurSummaryDto::from);
                    let bateau = bateau_repo.find_by_id(reservation.bateau_id).await?;
                    Some(PaiementReservationDto {
                        reservation,
                        utilisateur,
                        bateau,
                    })
                }
                None => None,
            };

            list.push(PaiementCompletDto {
                paiement,
                reservation,
            });
        }

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn dto(reservation_id: i32, etat: &str) -> CreatePaiementDto {
        CreatePaiementDto {
            reservation_id,
            montant: 1400.0,
            montant_total: 1500.0,
            methode_paiement: "carte".to_string(),
            pourcentage_stripe: 1.5,
            etat_paiement: etat.to_string(),
        }
    }

    #[tokio::test]
    async fn paye_confirms_reservation_and_notifies_owner() {
        let test = TestBuilder::new()
            .with_paiement_tables()
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
        assert_eq!(reservation.statut, StatutReservation::EnAttente);

        let service = PaiementService::new(db);
        let paiement = service.create(dto(reservation.id, "PAYE")).await.unwrap();

        assert_eq!(paiement.etat_paiement, EtatPaiement::Paye);
        assert_eq!(paiement.reservation_id, reservation.id);

        let reservation = entity::prelude::Reservation::find_by_id(reservation.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reservation.statut, StatutReservation::Confirmee);

        let messages = entity::prelude::Message::find().all(db).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].destinataire_id, Some(proprietaire.id));
        assert_eq!(messages[0].expediteur_id, renter.id);
        assert_eq!(messages[0].contenu, "Le paiement de 1500 € a été confirmé.");
    }

    #[tokio::test]
    async fn pending_payment_leaves_reservation_untouched() {
        let test = TestBuilder::new()
            .with_paiement_tables()
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

        let service = PaiementService::new(db);
        service.create(dto(reservation.id, "EN_ATTENTE")).await.unwrap();

        let reservation = entity::prelude::Reservation::find_by_id(reservation.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reservation.statut, StatutReservation::EnAttente);
    }

    #[tokio::test]
    async fn second_payment_is_a_conflict_and_changes_nothing() {
        let test = TestBuilder::new()
            .with_paiement_tables()
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

        let service = PaiementService::new(db);
        service.create(dto(reservation.id, "EN_ATTENTE")).await.unwrap();

        let result = service.create(dto(reservation.id, "PAYE")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        // Lifecycle status did not move despite the PAYE attempt.
        let reservation = entity::prelude::Reservation::find_by_id(reservation.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reservation.statut, StatutReservation::EnAttente);

        let paiements = entity::prelude::Paiement::find().all(db).await.unwrap();
        assert_eq!(paiements.len(), 1);
    }

    #[tokio::test]
    async fn rejects_unknown_etat_value() {
        let test = TestBuilder::new()
            .with_paiement_tables()
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

        let service = PaiementService::new(db);
        let result = service.create(dto(reservation.id, "REMBOURSE")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let paiements = entity::prelude::Paiement::find().all(db).await.unwrap();
        assert!(paiements.is_empty());
    }

    #[tokio::test]
    async fn unknown_reservation_is_not_found() {
        let test = TestBuilder::new()
            .with_paiement_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = PaiementService::new(db);
        let result = service.create(dto(123, "PAYE")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
