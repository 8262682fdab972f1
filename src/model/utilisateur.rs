use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Compact user projection joined into reservation/message payloads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UtilisateurSummaryDto {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
}

impl From<entity::utilisateur::Model> for UtilisateurSummaryDto {
    fn from(model: entity::utilisateur::Model) -> Self {
        Self {
            id: model.id,
            nom: model.nom,
            prenom: model.prenom,
            email: model.email,
        }
    }
}

/// Body of POST /api/utilisateurs.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUtilisateurDto {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub mot_de_passe: String,
    pub role: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub photo_profil: Option<String>,
}

/// Body of PUT /api/utilisateurs/{id}; absent fields are left unchanged.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUtilisateurDto {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub mot_de_passe: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub photo_profil: Option<String>,
}

/// Response of POST /api/utilisateurs and PUT /api/utilisateurs/{id}.
#[derive(Serialize)]
pub struct UtilisateurResponseDto {
    pub message: String,
    pub utilisateur: entity::utilisateur::Model,
}

/// Response of GET /api/utilisateurs.
#[derive(Serialize)]
pub struct ListeUtilisateursDto {
    pub utilisateurs: Vec<entity::utilisateur::Model>,
}
