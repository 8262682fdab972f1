//! Paiement factory for creating test payment records.

use chrono::Utc;
use entity::enums::EtatPaiement;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
pub struct PaiementFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    montant: f64,
    montant_total: f64,
    methode_paiement: String,
    pourcentage_stripe: f64,
    etat_paiement: EtatPaiement,
}

impl<'a> PaiementFactory<'a> {
    /// Creates a new PaiementFactory with default values.
    ///
    /// Defaults:
    /// - montant / montant_total: 100.0
    /// - methode_paiement: `"carte"`
    /// - pourcentage_stripe: 1.5
    /// - etat_paiement: `EtatPaiement::EnAttente`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `reservation_id` - Id of the paid reservation
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            montant: 100.0,
            montant_total: 100.0,
            methode_paiement: "carte".to_string(),
            pourcentage_stripe: 1.5,
            etat_paiement: EtatPaiement::EnAttente,
        }
    }

    /// Sets the paid amount.
    pub fn montant(mut self, montant: f64) -> Self {
        self.montant = montant;
        self
    }

    /// Sets the total amount.
    pub fn montant_total(mut self, montant_total: f64) -> Self {
        self.montant_total = montant_total;
        self
    }

    /// Sets the settlement state.
    pub fn etat_paiement(mut self, etat_paiement: EtatPaiement) -> Self {
        self.etat_paiement = etat_paiement;
        self
    }

    /// Builds and inserts the payment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::paiement::Model)` - Created payment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::paiement::Model, DbErr> {
        entity::paiement::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            montant: ActiveValue::Set(self.montant),
            montant_total: ActiveValue::Set(self.montant_total),
            methode_paiement: ActiveValue::Set(self.methode_paiement),
            pourcentage_stripe: ActiveValue::Set(self.pourcentage_stripe),
            etat_paiement: ActiveValue::Set(self.etat_paiement),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payment with default values for the specified reservation.
pub async fn create_paiement(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::paiement::Model, DbErr> {
    PaiementFactory::new(db, reservation_id).build().await
}
