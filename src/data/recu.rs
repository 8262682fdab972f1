use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RecuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the receipt attached to a payment
    pub async fn find_by_paiement(
        &self,
        paiement_id: i32,
    ) -> Result<Option<entity::recu::Model>, DbErr> {
        entity::prelude::Recu::find()
            .filter(entity::recu::Column::PaiementId.eq(paiement_id))
            .one(self.db)
            .await
    }

    /// Creates a receipt row for a payment
    pub async fn create(&self, paiement_id: i32) -> Result<entity::recu::Model, DbErr> {
        entity::recu::ActiveModel {
            paiement_id: ActiveValue::Set(paiement_id),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
