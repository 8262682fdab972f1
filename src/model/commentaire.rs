use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of POST /api/commentaires.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentaireDto {
    pub contenu: String,
    pub note: i32,
    pub auteur_id: i32,
    pub bateau_id: Option<i32>,
    pub reservation_id: Option<i32>,
}

/// Compact author projection joined into the review listing.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuteurDto {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub photo_profil: Option<String>,
    pub email: String,
    pub telephone: Option<String>,
}

impl From<entity::utilisateur::Model> for AuteurDto {
    fn from(model: entity::utilisateur::Model) -> Self {
        Self {
            id: model.id,
            nom: model.nom,
            prenom: model.prenom,
            photo_profil: model.photo_profil,
            email: model.email,
            telephone: model.telephone,
        }
    }
}

/// Review with its author joined.
#[derive(Serialize)]
pub struct CommentaireAvecAuteurDto {
    #[serde(flatten)]
    pub commentaire: entity::commentaire::Model,
    pub auteur: Option<AuteurDto>,
}
