use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of POST /api/demandes.
///
/// Everything besides `userId` is an opaque payload stored verbatim with
/// the request row.
#[derive(Deserialize, ToSchema)]
pub struct CreateDemandeDto {
    #[serde(rename = "userId")]
    #[schema(value_type = Option<Object>)]
    pub user_id: Option<serde_json::Value>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// Body of PUT /api/admin/demandes/{id}.
#[derive(Deserialize, ToSchema)]
pub struct UpdateStatutDemandeDto {
    pub statut: String,
}

/// Request row with its author joined, for the admin listing.
#[derive(Serialize)]
pub struct DemandeAvecUtilisateurDto {
    #[serde(flatten)]
    pub demande: entity::demande_proprietaire::Model,
    pub utilisateur: Option<entity::utilisateur::Model>,
}
