use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        paiement::{CreatedPaiementDto, CreatePaiementDto, ListePaiementsDto},
    },
    service::paiement::PaiementService,
    state::AppState,
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAIEMENT_TAG: &str = "paiement";

/// Record the payment of a reservation.
///
/// At most one payment per reservation; a PAYE payment flips the
/// reservation to CONFIRMEE and notifies the owner, all in one
/// transaction.
///
/// # Returns
/// - `201 Created` - Payment recorded
/// - `400 Bad Request` - Unrecognized etatPaiement value
/// - `404 Not Found` - Unknown reservation
/// - `409 Conflict` - A payment already exists for the reservation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/paiements",
    tag = PAIEMENT_TAG,
    request_body = CreatePaiementDto,
    responses(
        (status = 201, description = "Payment recorded"),
        (status = 400, description = "Invalid etatPaiement", body = ErrorDto),
        (status = 404, description = "Unknown reservation", body = ErrorDto),
        (status = 409, description = "Payment already recorded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_paiement(
    State(state): State<AppState>,
    Json(dto): Json<CreatePaiementDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaiementService::new(&state.db);

    let paiement = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedPaiementDto {
            message: "Paiement enregistré".to_string(),
            paiement,
        }),
    ))
}

/// GET /api/paiements/admin
/// List every payment with its reservation chain
pub async fn get_all_paiements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaiementService::new(&state.db);
    let paiements = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ListePaiementsDto {
            success: true,
            paiements,
        }),
    ))
}

/// GET /api/paiements/proprietaire/{proprietaire_id}
/// List the payments received on an owner's boats
pub async fn get_paiements_by_proprietaire(
    State(state): State<AppState>,
    Path(proprietaire_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaiementService::new(&state.db);
    let paiements = service.get_for_proprietaire(proprietaire_id).await?;

    Ok((
        StatusCode::OK,
        Json(ListePaiementsDto {
            success: true,
            paiements,
        }),
    ))
}
