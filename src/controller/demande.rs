use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::MessageDto,
        demande::{CreateDemandeDto, UpdateStatutDemandeDto},
    },
    service::demande::DemandeService,
    state::AppState,
};

/// Tag for grouping partnership request endpoints in OpenAPI documentation
pub static DEMANDE_TAG: &str = "demande";

/// Submit a partnership request.
///
/// Rate-limited to one request per calendar day and one per rolling 7-day
/// window; on success the platform admin is notified.
///
/// # Returns
/// - `200 OK` - Request recorded and admin notified
/// - `401 Unauthorized` - Missing or non-numeric userId
/// - `409 Conflict` - Daily or weekly limit hit
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/demandes",
    tag = DEMANDE_TAG,
    request_body = CreateDemandeDto,
    responses(
        (status = 200, description = "Request recorded", body = MessageDto),
        (status = 401, description = "Not logged in", body = MessageDto),
        (status = 409, description = "Daily or weekly limit hit", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn post_demande(
    State(state): State<AppState>,
    Json(dto): Json<CreateDemandeDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = parse_user_id(&dto.user_id) else {
        return Err(AppError::Unauthorized(
            "Vous devez être connecté pour soumettre une demande de partenariat.".to_string(),
        ));
    };

    let service = DemandeService::new(&state.db);

    let payload = serde_json::Value::Object(dto.payload.clone()).to_string();
    service.create(user_id, payload).await?;
    service.notify_admin(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Demande enregistrée avec succès !".to_string(),
        }),
    ))
}

/// GET /api/admin/demandes
/// List every partnership request with its author (admin only)
pub async fn get_all_demandes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = DemandeService::new(&state.db);
    let demandes = service.get_all().await?;

    Ok((StatusCode::OK, Json(demandes)))
}

/// Apply an admin decision to a partnership request.
///
/// ACCEPTEE promotes the requester to PROPRIETAIRE; either decision
/// notifies the requester and stamps the request row.
///
/// # Returns
/// - `200 OK` - Updated request row
/// - `400 Bad Request` - Unrecognized statut value
/// - `404 Not Found` - Unknown request
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/demandes/{id}",
    tag = DEMANDE_TAG,
    params(("id" = i32, Path, description = "Request id")),
    request_body = UpdateStatutDemandeDto,
    responses(
        (status = 200, description = "Request updated"),
        (status = 400, description = "Invalid statut"),
        (status = 404, description = "Unknown request"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_demande_statut(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateStatutDemandeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DemandeService::new(&state.db);

    let demande = service.update_statut(id, &dto.statut).await?;

    Ok((StatusCode::OK, Json(demande)))
}

/// Accepts the id both as a JSON number and as a numeric string.
fn parse_user_id(value: &Option<serde_json::Value>) -> Option<i32> {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().map(|v| v as i32),
        Some(serde_json::Value::String(s)) => s.parse::<i32>().ok(),
        _ => None,
    }
}
