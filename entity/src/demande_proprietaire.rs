use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::StatutDemande;

/// Partnership request: a CLIENT's application to become PROPRIETAIRE.
///
/// `date_demande` is day-granular; the (utilisateur_id, date_demande)
/// unique index enforces one request per user per calendar day.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "demande_proprietaire")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub utilisateur_id: i32,
    /// Opaque JSON payload submitted with the request.
    pub data: String,
    pub date_demande: Date,
    pub statut: StatutDemande,
    pub date_traitement: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::UtilisateurId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Utilisateur,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
