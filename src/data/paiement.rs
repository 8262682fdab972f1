//! Payment data repository for database operations.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

pub struct PaiementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaiementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the payment recorded for a reservation, if any.
    ///
    /// The reservation reference is unique, so at most one row can match.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: A payment exists for the reservation
    /// - `Ok(None)`: No payment recorded yet
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::paiement::Model>, DbErr> {
        entity::prelude::Paiement::find()
            .filter(entity::paiement::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }

    /// Gets every payment, newest first
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All payments
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::paiement::Model>, DbErr> {
        entity::prelude::Paiement::find()
            .order_by_desc(entity::paiement::Column::CreeLe)
            .all(self.db)
            .await
    }

    /// Gets payments on boats owned by a user.
    ///
    /// Matched through the reservation → boat chain.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Payments received by the owner
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_proprietaire(
        &self,
        proprietaire_id: i32,
    ) -> Result<Vec<entity::paiement::Model>, DbErr> {
        entity::prelude::Paiement::find()
            .join(
                JoinType::InnerJoin,
                entity::paiement::Relation::Reservation.def(),
            )
            .join(JoinType::InnerJoin, entity::reservation::Relation::Bateau.def())
            .filter(entity::bateau::Column::ProprietaireId.eq(proprietaire_id))
            .order_by_desc(entity::paiement::Column::CreeLe)
            .all(self.db)
            .await
    }
}
