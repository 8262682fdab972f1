use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::commentaire::{CommentaireRepository, CreateCommentaireParams},
    error::AppError,
    model::commentaire::{AuteurDto, CommentaireAvecAuteurDto, CreateCommentaireDto},
    state::AppState,
};

#[derive(Deserialize)]
pub struct CommentairesQuery {
    #[serde(rename = "bateauId")]
    pub bateau_id: Option<i32>,
}

/// GET /api/commentaires?bateauId=
/// List reviews, optionally filtered by boat
pub async fn get_commentaires(
    State(state): State<AppState>,
    Query(query): Query<CommentairesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = CommentaireRepository::new(&state.db);

    let commentaires: Vec<CommentaireAvecAuteurDto> = repo
        .get_all_with_auteur(query.bateau_id)
        .await?
        .into_iter()
        .map(|(commentaire, auteur)| CommentaireAvecAuteurDto {
            commentaire,
            auteur: auteur.map(AuteurDto::from),
        })
        .collect();

    Ok((StatusCode::OK, Json(commentaires)))
}

/// POST /api/commentaires
/// Leave a review on a boat
pub async fn create_commentaire(
    State(state): State<AppState>,
    Json(dto): Json<CreateCommentaireDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.contenu.trim().is_empty() {
        return Err(AppError::BadRequest("Données manquantes".to_string()));
    }

    let repo = CommentaireRepository::new(&state.db);
    let commentaire = repo
        .create(CreateCommentaireParams {
            contenu: dto.contenu,
            note: dto.note,
            auteur_id: dto.auteur_id,
            bateau_id: dto.bateau_id,
            reservation_id: dto.reservation_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(commentaire)))
}
