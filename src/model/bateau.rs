use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::utilisateur::UtilisateurSummaryDto;

/// Body of POST /api/bateaux and PUT /api/bateaux/{id}.
///
/// Field names follow the listing form the frontend submits; the nested
/// details record is flattened into the same payload.
#[derive(Deserialize, ToSchema)]
pub struct CreateBateauDto {
    #[serde(rename = "nomBateau")]
    pub nom_bateau: String,
    #[serde(rename = "modeleMarque")]
    pub modele_marque: Option<String>,
    pub portattache: Option<String>,
    #[serde(rename = "typeBateau")]
    pub type_bateau: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub indisponibilites: Option<serde_json::Value>,
    #[serde(rename = "proprietaireId")]
    pub proprietaire_id: i32,

    // Details sub-record
    pub longueur: Option<f64>,
    pub largeur: Option<f64>,
    #[serde(rename = "tirantEau")]
    pub tirant_eau: Option<f64>,
    #[serde(rename = "capaciteMax")]
    pub capacite_max: Option<i32>,
    #[serde(rename = "nombreCabines")]
    pub nombre_cabines: Option<i32>,
    #[serde(rename = "nombreCouchages")]
    pub nombre_couchages: Option<i32>,
    #[serde(rename = "equipementsInclus")]
    #[schema(value_type = Option<Object>)]
    pub equipements_inclus: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub tags: Option<serde_json::Value>,
    pub zonesnavigation: Option<String>,
    pub depotgarantie: Option<String>,
    #[serde(rename = "dureeLocation")]
    pub duree_location: Option<String>,
    #[serde(rename = "politiqueAnnulation")]
    pub politique_annulation: Option<String>,
    #[serde(rename = "locationSansPermis", default)]
    pub location_sans_permis: bool,
    #[serde(rename = "numeroPoliceAssurance")]
    pub numero_police_assurance: Option<String>,
    #[serde(rename = "certificatNavigation")]
    pub certificat_navigation: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub tarifications: Option<serde_json::Value>,
    #[serde(rename = "anneeConstruction")]
    pub annee_construction: Option<String>,
    pub portdepart: Option<String>,
    pub portarriver: Option<String>,
    #[serde(rename = "passagersInclusDansLePrix", alias = "PassagersInclusDansLePrix")]
    pub passagers_inclus_dans_le_prix: Option<String>,
    #[serde(
        rename = "supplementParPassager",
        alias = "SupplementParPassagerSupplémentaire"
    )]
    pub supplement_par_passager: Option<String>,
    #[serde(rename = "moteurs", alias = "Moteurs")]
    pub moteurs: Option<String>,
    #[serde(rename = "reservoirEau")]
    pub reservoir_eau: Option<String>,
    #[serde(rename = "reservoirCarburant")]
    pub reservoir_carburant: Option<String>,
}

/// Boat with its joined relations, mirroring the nested listing payload.
#[derive(Serialize)]
pub struct BateauCompletDto {
    #[serde(flatten)]
    pub bateau: entity::bateau::Model,
    pub details: Option<entity::details_bateau::Model>,
    pub medias: Vec<entity::media::Model>,
    pub proprietaire: Option<UtilisateurSummaryDto>,
}

/// Response of POST /api/bateaux.
#[derive(Serialize)]
pub struct CreatedBateauDto {
    pub success: bool,
    pub bateau: BateauCompletDto,
    #[serde(rename = "bateauId")]
    pub bateau_id: i32,
}

/// Response of the single-boat read endpoints.
#[derive(Serialize)]
pub struct BateauResponseDto {
    pub success: bool,
    pub bateau: BateauCompletDto,
}

/// Response of the boat list endpoints.
#[derive(Serialize)]
pub struct ListeBateauxDto {
    pub success: bool,
    pub bateaux: Vec<BateauCompletDto>,
}
