use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bateau")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    /// Unique URL identifier derived from `nom`, suffixed on collision.
    #[sea_orm(unique)]
    pub slug: String,
    pub modele: Option<String>,
    pub portdefault: Option<String>,
    pub type_bateau: Option<String>,
    pub description: Option<String>,
    /// JSON array of unavailable date ranges, stored verbatim.
    pub dates_indisponibles: Option<String>,
    pub proprietaire_id: i32,
    pub cree_le: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::ProprietaireId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Proprietaire,
    #[sea_orm(has_one = "super::details_bateau::Entity")]
    DetailsBateau,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::media::Entity")]
    Media,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proprietaire.def()
    }
}

impl Related<super::details_bateau::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetailsBateau.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
