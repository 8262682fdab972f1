use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review left by a renter on a boat, with a numeric rating.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commentaire")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contenu: String,
    pub note: i32,
    pub auteur_id: i32,
    pub bateau_id: Option<i32>,
    pub reservation_id: Option<i32>,
    pub cree_le: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::AuteurId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Auteur,
    #[sea_orm(
        belongs_to = "super::bateau::Entity",
        from = "Column::BateauId",
        to = "super::bateau::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bateau,
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Reservation,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auteur.def()
    }
}

impl Related<super::bateau::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bateau.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
