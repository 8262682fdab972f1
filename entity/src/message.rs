use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Notification or direct communication row. Created by user action or
/// synthetically by the reservation, payment and partnership workflows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "message")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub expediteur_id: i32,
    pub destinataire_id: Option<i32>,
    pub reservation_id: Option<i32>,
    pub bateau_id: Option<i32>,
    pub contenu: String,
    /// Subject line; serialized as `object`, the key the API always used.
    #[serde(rename = "object")]
    pub objet: Option<String>,
    /// Read flag, flipped only by the recipient.
    pub lu: bool,
    pub date_envoi: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::ExpediteurId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Expediteur,
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::DestinataireId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Destinataire,
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Reservation,
    #[sea_orm(
        belongs_to = "super::bateau::Entity",
        from = "Column::BateauId",
        to = "super::bateau::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Bateau,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::bateau::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bateau.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
