use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        reservation::{
            CreatedReservationDto, CreateReservationDto, ReservationsCompletesDto,
            ReservationsUtilisateurDto, UpdateStatutReservationDto,
            UpdateStatutReservationResponseDto,
        },
    },
    service::reservation::ReservationService,
    state::AppState,
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

#[derive(Deserialize)]
pub struct ReservationsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}

/// Create a reservation.
///
/// Checks the requested date range against the renter's existing
/// reservations on the same boat and notifies the owner on success.
///
/// # Returns
/// - `201 Created` - Reservation created, lifecycle status EN_ATTENTE
/// - `404 Not Found` - Unknown boat
/// - `409 Conflict` - Overlapping reservation for these dates
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created"),
        (status = 404, description = "Unknown boat", body = ErrorDto),
        (status = 409, description = "Overlapping reservation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let reservation = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedReservationDto {
            message: "Réservation créée".to_string(),
            reservation,
        }),
    ))
}

/// GET /api/reservations?userId=
/// List a renter's reservations, newest start date first
pub async fn get_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = query.user_id else {
        return Err(AppError::BadRequest("userId est requis".to_string()));
    };

    let service = ReservationService::new(&state.db);
    let reservations = service.get_for_utilisateur(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReservationsUtilisateurDto {
            success: true,
            reservations,
        }),
    ))
}

/// GET /api/reservations/proprietaire/{proprietaire_id}
/// List the reservations on an owner's boats with deep joins
pub async fn get_reservations_by_proprietaire(
    State(state): State<AppState>,
    Path(proprietaire_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);
    let reservations = service.get_for_proprietaire(proprietaire_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReservationsCompletesDto {
            success: true,
            reservations,
        }),
    ))
}

/// GET /api/reservations/admin
/// List every reservation with deep joins
pub async fn get_all_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);
    let reservations = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ReservationsCompletesDto {
            success: true,
            reservations,
        }),
    ))
}

/// Update the owner's free-form status of a reservation.
///
/// Sets the free-text status field and notifies the renter; both writes
/// commit atomically.
///
/// # Returns
/// - `200 OK` - Updated reservation and the created notification
/// - `400 Bad Request` - Missing status text or sender id
/// - `404 Not Found` - Unknown reservation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation id")),
    request_body = UpdateStatutReservationDto,
    responses(
        (status = 200, description = "Status updated and renter notified"),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "Unknown reservation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_statut(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateStatutReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.statusduproprietaire.trim().is_empty() {
        return Err(AppError::BadRequest(
            "id, statusduproprietaire et expediteurId sont requis".to_string(),
        ));
    }

    let service = ReservationService::new(&state.db);
    let (reservation, message) = service.update_statut(id, dto).await?;

    Ok((
        StatusCode::OK,
        Json(UpdateStatutReservationResponseDto {
            success: true,
            reservation,
            message,
        }),
    ))
}
