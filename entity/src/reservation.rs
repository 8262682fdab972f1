use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::StatutReservation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub utilisateur_id: i32,
    pub bateau_id: i32,
    pub date_debut: DateTimeUtc,
    pub date_fin: DateTimeUtc,
    /// Lifecycle status, flipped to CONFIRMEE by a successful payment.
    pub statut: StatutReservation,
    /// Free-form status text set by the owner, distinct from `statut`.
    pub data: Option<String>,
    pub plage: Option<String>,
    pub nombre_de_passagers: Option<i32>,
    pub supplement: Option<String>,
    pub heure: Option<String>,
    pub prix_de_base: f64,
    pub prix_supplement_passagers: f64,
    pub prix_options_payantes: f64,
    pub total: f64,
    pub montant_final: f64,
    pub commission: f64,
    pub cree_le: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::bateau::Entity",
        from = "Column::BateauId",
        to = "super::bateau::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bateau,
    #[sea_orm(has_one = "super::paiement::Entity")]
    Paiement,
    #[sea_orm(has_one = "super::contrat::Entity")]
    Contrat,
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl Related<super::bateau::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bateau.def()
    }
}

impl Related<super::paiement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Paiement.def()
    }
}

impl Related<super::contrat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contrat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
