use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::EtatPaiement;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "paiement")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// At most one payment per reservation.
    #[sea_orm(unique)]
    pub reservation_id: i32,
    pub montant: f64,
    pub montant_total: f64,
    pub methode_paiement: String,
    pub pourcentage_stripe: f64,
    pub etat_paiement: EtatPaiement,
    pub cree_le: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
    #[sea_orm(has_one = "super::recu::Entity")]
    Recu,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::recu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
