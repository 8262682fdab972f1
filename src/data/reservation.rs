//! Reservation data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a reservation by the same renter on the same boat whose date
    /// range overlaps the requested one.
    ///
    /// The overlap test is inclusive on both bounds:
    /// `existing.date_debut <= date_fin AND existing.date_fin >= date_debut`,
    /// so a request starting exactly on an existing end date counts as a
    /// conflict.
    ///
    /// # Arguments
    /// - `utilisateur_id`: Renter id
    /// - `bateau_id`: Boat id
    /// - `date_debut`: Requested range start
    /// - `date_fin`: Requested range end
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: A conflicting reservation exists
    /// - `Ok(None)`: The range is free for this renter/boat pair
    /// - `Err(DbErr)`: Database error
    pub async fn find_overlapping(
        &self,
        utilisateur_id: i32,
        bateau_id: i32,
        date_debut: DateTime<Utc>,
        date_fin: DateTime<Utc>,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UtilisateurId.eq(utilisateur_id))
            .filter(entity::reservation::Column::BateauId.eq(bateau_id))
            .filter(entity::reservation::Column::DateDebut.lte(date_fin))
            .filter(entity::reservation::Column::DateFin.gte(date_debut))
            .one(self.db)
            .await
    }

    /// Finds a reservation by id
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Reservation found
    /// - `Ok(None)`: No reservation with that id
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all reservations of a renter, newest start date first
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: The renter's reservations
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_utilisateur(
        &self,
        utilisateur_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UtilisateurId.eq(utilisateur_id))
            .order_by_desc(entity::reservation::Column::DateDebut)
            .all(self.db)
            .await
    }

    /// Gets all reservations on boats owned by a user, newest first
    ///
    /// # Arguments
    /// - `proprietaire_id`: Owner id, matched through the boat relation
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Reservations on the owner's boats
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_proprietaire(
        &self,
        proprietaire_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .join(JoinType::InnerJoin, entity::reservation::Relation::Bateau.def())
            .filter(entity::bateau::Column::ProprietaireId.eq(proprietaire_id))
            .order_by_desc(entity::reservation::Column::CreeLe)
            .all(self.db)
            .await
    }

    /// Gets every reservation, newest first
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All reservations
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .order_by_desc(entity::reservation::Column::CreeLe)
            .all(self.db)
            .await
    }
}
