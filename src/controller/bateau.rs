use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::SuccessMessageDto,
        bateau::{BateauResponseDto, CreateBateauDto, CreatedBateauDto, ListeBateauxDto},
    },
    service::bateau::BateauService,
    state::AppState,
};

/// POST /api/bateaux
/// Create a listing with a generated unique slug
pub async fn create_bateau(
    State(state): State<AppState>,
    Json(dto): Json<CreateBateauDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BateauService::new(&state.db);

    let bateau = service.create(dto).await?;
    let bateau_id = bateau.bateau.id;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBateauDto {
            success: true,
            bateau,
            bateau_id,
        }),
    ))
}

/// GET /api/bateaux
/// List every boat with details, medias and owner
pub async fn get_bateaux(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BateauService::new(&state.db);
    let bateaux = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ListeBateauxDto {
            success: true,
            bateaux,
        }),
    ))
}

/// GET /api/bateaux/{id}
pub async fn get_bateau(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BateauService::new(&state.db);
    let bateau = service.get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(BateauResponseDto {
            success: true,
            bateau,
        }),
    ))
}

/// GET /api/bateaux/slug/{slug}
pub async fn get_bateau_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BateauService::new(&state.db);
    let bateau = service.get_by_slug(&slug).await?;

    Ok((
        StatusCode::OK,
        Json(BateauResponseDto {
            success: true,
            bateau,
        }),
    ))
}

/// PUT /api/bateaux/{id}
/// Update a listing and replace its details record
pub async fn update_bateau(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateBateauDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BateauService::new(&state.db);
    let bateau = service.update(id, dto).await?;

    Ok((
        StatusCode::OK,
        Json(BateauResponseDto {
            success: true,
            bateau,
        }),
    ))
}

/// DELETE /api/bateaux/slug/{slug}
pub async fn delete_bateau_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BateauService::new(&state.db);
    service.delete_by_slug(&slug).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessMessageDto {
            success: true,
            message: "Bateau supprimé avec succès".to_string(),
        }),
    ))
}

/// GET /api/bateaux/proprietaire/{proprietaire_id}
pub async fn get_bateaux_by_proprietaire(
    State(state): State<AppState>,
    Path(proprietaire_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BateauService::new(&state.db);
    let bateaux = service.get_by_proprietaire(proprietaire_id).await?;

    Ok((
        StatusCode::OK,
        Json(ListeBateauxDto {
            success: true,
            bateaux,
        }),
    ))
}
