use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Technical and commercial details attached 1:1 to a boat listing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "details_bateau")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub bateau_id: i32,
    pub longueur: Option<f64>,
    pub largeur: Option<f64>,
    pub tirant_eau: Option<f64>,
    pub capacite_max: Option<i32>,
    pub nombre_cabines: Option<i32>,
    pub nombre_couchages: Option<i32>,
    /// JSON array of included equipment labels.
    pub equipements: Option<String>,
    /// JSON array of paid options.
    pub options_payantes: Option<String>,
    pub zones_navigation: Option<String>,
    pub depot_garantie: Option<String>,
    pub duree_location: Option<String>,
    pub politique_annulation: Option<String>,
    pub location_sans_permis: bool,
    pub numero_police_assurance: Option<String>,
    pub certificat_navigation: Option<String>,
    /// JSON array of seasonal pricing entries.
    pub tarifications: Option<String>,
    pub annee_construction: Option<String>,
    pub portdedepart: Option<String>,
    pub portdarriver: Option<String>,
    pub passagers_inclus_dans_le_prix: Option<String>,
    pub supplement_par_passager: Option<String>,
    pub moteur: Option<String>,
    pub reservoir_eau: Option<String>,
    pub reservoir_carburant: Option<String>,
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
}

impl Related<super::bateau::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bateau.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
