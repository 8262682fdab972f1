//! Demande factory for creating test partnership requests.

use chrono::{NaiveDate, Utc};
use entity::enums::StatutDemande;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test partnership requests with customizable fields.
pub struct DemandeFactory<'a> {
    db: &'a DatabaseConnection,
    utilisateur_id: i32,
    data: String,
    date_demande: NaiveDate,
    statut: StatutDemande,
}

impl<'a> DemandeFactory<'a> {
    /// Creates a new DemandeFactory with default values.
    ///
    /// Defaults:
    /// - data: `"{}"`
    /// - date_demande: today (UTC)
    /// - statut: `StatutDemande::EnAttente`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `utilisateur_id` - Id of the requesting user
    pub fn new(db: &'a DatabaseConnection, utilisateur_id: i32) -> Self {
        Self {
            db,
            utilisateur_id,
            data: "{}".to_string(),
            date_demande: Utc::now().date_naive(),
            statut: StatutDemande::EnAttente,
        }
    }

    /// Sets the opaque payload.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Sets the submission day.
    pub fn date_demande(mut self, date_demande: NaiveDate) -> Self {
        self.date_demande = date_demande;
        self
    }

    /// Sets the decision status.
    pub fn statut(mut self, statut: StatutDemande) -> Self {
        self.statut = statut;
        self
    }

    /// Builds and inserts the request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::demande_proprietaire::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::demande_proprietaire::Model, DbErr> {
        entity::demande_proprietaire::ActiveModel {
            utilisateur_id: ActiveValue::Set(self.utilisateur_id),
            data: ActiveValue::Set(self.data),
            date_demande: ActiveValue::Set(self.date_demande),
            statut: ActiveValue::Set(self.statut),
            date_traitement: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending request dated today for the specified user.
pub async fn create_demande(
    db: &DatabaseConnection,
    utilisateur_id: i32,
) -> Result<entity::demande_proprietaire::Model, DbErr> {
    DemandeFactory::new(db, utilisateur_id).build().await
}
