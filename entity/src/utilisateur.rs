use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::RoleUtilisateur;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "utilisateur")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 hash, never serialized in API responses.
    #[serde(skip_serializing)]
    pub mot_de_passe: String,
    pub role: RoleUtilisateur,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub photo_profil: Option<String>,
    pub cree_le: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bateau::Entity")]
    Bateau,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::demande_proprietaire::Entity")]
    DemandeProprietaire,
    #[sea_orm(has_many = "super::commentaire::Entity")]
    Commentaire,
}

impl Related<super::bateau::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bateau.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::demande_proprietaire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DemandeProprietaire.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
