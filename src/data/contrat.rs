use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct ContratRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContratRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the contract attached to a reservation
    pub async fn find_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::contrat::Model>, DbErr> {
        entity::prelude::Contrat::find()
            .filter(entity::contrat::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }

    /// Creates a signed contract row for a reservation
    pub async fn create(&self, reservation_id: i32) -> Result<entity::contrat::Model, DbErr> {
        entity::contrat::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            signature: ActiveValue::Set(true),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
