use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::TypeMedia;

/// Reference to an externally stored file, optionally attached to a boat,
/// a user profile, a contract or a receipt.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub url: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub type_media: TypeMedia,
    pub titre: Option<String>,
    pub description: Option<String>,
    pub numero_police: Option<String>,
    pub bateau_id: Option<i32>,
    pub utilisateur_id: Option<i32>,
    pub contrat_id: Option<i32>,
    pub recu_id: Option<i32>,
    pub cree_le: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bateau::Entity",
        from = "Column::BateauId",
        to = "super::bateau::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bateau,
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::UtilisateurId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Utilisateur,
    #[sea_orm(
        belongs_to = "super::contrat::Entity",
        from = "Column::ContratId",
        to = "super::contrat::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Contrat,
    #[sea_orm(
        belongs_to = "super::recu::Entity",
        from = "Column::RecuId",
        to = "super::recu::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recu,
}

impl Related<super::bateau::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bateau.def()
    }
}

impl Related<super::contrat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contrat.def()
    }
}

impl Related<super::recu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
