//! Partnership request data repository for database operations.

use chrono::NaiveDate;
use entity::enums::StatutDemande;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct DemandeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemandeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the request a user submitted on a given day, if any.
    ///
    /// Backed by the (utilisateur_id, date_demande) unique index, so at most
    /// one row can match.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: A request exists for that day
    /// - `Ok(None)`: No request that day
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_utilisateur_and_date(
        &self,
        utilisateur_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::demande_proprietaire::Model>, DbErr> {
        entity::prelude::DemandeProprietaire::find()
            .filter(entity::demande_proprietaire::Column::UtilisateurId.eq(utilisateur_id))
            .filter(entity::demande_proprietaire::Column::DateDemande.eq(date))
            .one(self.db)
            .await
    }

    /// Finds the user's most recent request on or after the given day.
    ///
    /// Used by the rolling 7-day limit: the caller passes "7 days ago" and
    /// receives the newest request inside that window.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Most recent request in the window
    /// - `Ok(None)`: No request in the window
    /// - `Err(DbErr)`: Database error
    pub async fn find_latest_since(
        &self,
        utilisateur_id: i32,
        since: NaiveDate,
    ) -> Result<Option<entity::demande_proprietaire::Model>, DbErr> {
        entity::prelude::DemandeProprietaire::find()
            .filter(entity::demande_proprietaire::Column::UtilisateurId.eq(utilisateur_id))
            .filter(entity::demande_proprietaire::Column::DateDemande.gte(since))
            .order_by_desc(entity::demande_proprietaire::Column::DateDemande)
            .one(self.db)
            .await
    }

    /// Creates a pending request dated on the given day
    ///
    /// # Arguments
    /// - `utilisateur_id`: Requesting user
    /// - `data`: Opaque JSON payload stored verbatim
    /// - `date_demande`: Submission day (start of today)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created request
    /// - `Err(DbErr)`: Database error (including the daily unique violation)
    pub async fn create(
        &self,
        utilisateur_id: i32,
        data: String,
        date_demande: NaiveDate,
    ) -> Result<entity::demande_proprietaire::Model, DbErr> {
        entity::demande_proprietaire::ActiveModel {
            utilisateur_id: ActiveValue::Set(utilisateur_id),
            data: ActiveValue::Set(data),
            date_demande: ActiveValue::Set(date_demande),
            statut: ActiveValue::Set(StatutDemande::EnAttente),
            date_traitement: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a request by id
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Request found
    /// - `Ok(None)`: No request with that id
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::demande_proprietaire::Model>, DbErr> {
        entity::prelude::DemandeProprietaire::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets every request with its author joined, newest day first
    ///
    /// # Returns
    /// - `Ok(Vec<(Model, Option<Model>)>)`: Requests with their users
    /// - `Err(DbErr)`: Database error
    pub async fn get_all_with_utilisateur(
        &self,
    ) -> Result<
        Vec<(
            entity::demande_proprietaire::Model,
            Option<entity::utilisateur::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::DemandeProprietaire::find()
            .find_also_related(entity::prelude::Utilisateur)
            .order_by_desc(entity::demande_proprietaire::Column::DateDemande)
            .all(self.db)
            .await
    }
}
