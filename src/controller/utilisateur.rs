use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::MessageDto,
        utilisateur::{
            CreateUtilisateurDto, ListeUtilisateursDto, UpdateUtilisateurDto,
            UtilisateurResponseDto,
        },
    },
    service::utilisateur::UtilisateurService,
    state::AppState,
};

/// POST /api/utilisateurs
/// Create an account from the management surface
pub async fn create_utilisateur(
    State(state): State<AppState>,
    Json(dto): Json<CreateUtilisateurDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UtilisateurService::new(&state.db);

    let utilisateur = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(UtilisateurResponseDto {
            message: "Utilisateur créé".to_string(),
            utilisateur,
        }),
    ))
}

/// GET /api/utilisateurs
pub async fn get_utilisateurs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = UtilisateurService::new(&state.db);
    let utilisateurs = service.get_all().await?;

    Ok((StatusCode::OK, Json(ListeUtilisateursDto { utilisateurs })))
}

/// GET /api/utilisateurs/{id}
pub async fn get_utilisateur(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UtilisateurService::new(&state.db);
    let utilisateur = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(utilisateur)))
}

/// PUT /api/utilisateurs/{id}
pub async fn update_utilisateur(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUtilisateurDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UtilisateurService::new(&state.db);
    let utilisateur = service.update(id, dto).await?;

    Ok((
        StatusCode::OK,
        Json(UtilisateurResponseDto {
            message: "Utilisateur mis à jour".to_string(),
            utilisateur,
        }),
    ))
}

/// DELETE /api/utilisateurs/{id}
pub async fn delete_utilisateur(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UtilisateurService::new(&state.db);
    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Utilisateur supprimé avec succès".to_string(),
        }),
    ))
}
