use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receipt wrapper around a payment; the uploaded file lives in `media`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recu")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub paiement_id: i32,
    pub cree_le: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::paiement::Entity",
        from = "Column::PaiementId",
        to = "super::paiement::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Paiement,
    #[sea_orm(has_many = "super::media::Entity")]
    Media,
}

impl Related<super::paiement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Paiement.def()
    }
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
